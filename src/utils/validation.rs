use regex::Regex;

pub fn validate_email(email: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    re.is_match(email)
}

/// Indonesian mobile numbers, either +62 or local 0-prefixed form.
pub fn validate_phone(phone: &str) -> bool {
    let re = Regex::new(r"^(\+628|08)\d{8,11}$").unwrap();
    re.is_match(phone)
}
