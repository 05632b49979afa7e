use fichas_core::error::FichasError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), FichasError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
