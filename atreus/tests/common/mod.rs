use atreus::boot::BootloaderJump;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Records bootloader jumps instead of resetting the chip
#[derive(Debug, Default)]
pub struct MockBootloader {
    pub jumps: usize,
}

impl BootloaderJump for MockBootloader {
    fn jump_to_bootloader(&mut self) {
        self.jumps += 1;
    }
}
