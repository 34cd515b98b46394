use crate::boot::BootloaderJump;
use crate::types::function::FunctionId;

/// Run the function bound to a key.
///
/// New functions are added to [`FunctionId`], this match then forces them to be handled.
pub fn on_function_invoked<B: BootloaderJump>(id: FunctionId, bootloader: &mut B) {
    match id {
        FunctionId::Bootloader => {
            info!("Entering bootloader");
            bootloader.jump_to_bootloader();
        }
    }
}

/// Run the function with a raw id. Ids that aren't defined are ignored.
pub fn on_raw_function_invoked<B: BootloaderJump>(id: u8, bootloader: &mut B) {
    match FunctionId::from_id(id) {
        Some(f) => on_function_invoked(f, bootloader),
        None => debug!("Ignoring unknown function id {}", id),
    }
}
