use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for participant / contact phone numbers
    /// Optional leading "+", then 6-20 digits separated by spaces, dots, hyphens or parentheses
    /// - Valid: "+62812345678", "0274 123 456", "(0274) 555-123", "0812.3456.7890"
    /// - Invalid: "abc", "12", "+62-812-xxx", "------"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[ ().\-]*(?:[0-9][ ().\-]*){6,20}$").unwrap();
}
