use mlimi_core::error::MlimiError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), MlimiError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
