//! Bootloader entry.

/// The primitive which hands control over to the bootloader.
///
/// On hardware this doesn't come back. Implementations used in tests just record the call.
pub trait BootloaderJump {
    fn jump_to_bootloader(&mut self);
}

/// Jumps with [`jump_to_bootloader`] on the running chip
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBootloader;

impl BootloaderJump for SystemBootloader {
    fn jump_to_bootloader(&mut self) {
        jump_to_bootloader();
    }
}

pub fn jump_to_bootloader() {
    #[cfg(feature = "rp2040_bl")]
    // Jump to RP2040 bootloader
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);

    #[cfg(not(feature = "rp2040_bl"))]
    warn!("No bootloader feature enabled, rebooting instead");

    reboot_keyboard();
}

pub fn reboot_keyboard() {
    warn!("Rebooting keyboard!");
    // For cortex-m:
    #[cfg(all(
        target_arch = "arm",
        target_os = "none",
        any(target_abi = "eabi", target_abi = "eabihf")
    ))]
    cortex_m::peripheral::SCB::sys_reset();
}
