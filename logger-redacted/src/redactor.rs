use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    // 9 to 15 digits, optionally prefixed with '+' or '(' and separated by spaces, hyphens or parentheses.
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+|\()?\d(?:[\s()\-]{0,2}\d){8,14}").unwrap();
    static ref IP_REGEX: Regex = Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap();
    static ref SHARED: PiiRedactor = PiiRedactor::new(RedactionConfig::default());
}

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_ip_addresses: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_emails: true,
            redact_phones: true,
            redact_ip_addresses: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// PII redactor for log messages and fields
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Process-wide redactor with the default configuration
    pub fn shared() -> &'static PiiRedactor {
        &SHARED
    }

    /// Redact every recognised PII pattern in free text
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        // IPs go before phones: a dotted quad must not be read as a phone number.
        if self.config.redact_ip_addresses {
            result = self.redact_ip_addresses(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    /// Mask a value already known to be a phone number, whatever its format
    pub fn mask_phone(&self, phone: &str) -> String {
        let phone = phone.trim();
        if phone.is_empty() {
            return String::new();
        }
        if self.config.hash_for_correlation {
            format!("PHONE[{}]", self.hash_value(phone))
        } else {
            let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
            let tail: String = digits.iter().skip(digits.len().saturating_sub(2)).collect();
            format!("***-***-**{tail}")
        }
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let email = caps.get(0).map_or("", |m| m.as_str());
                if self.config.hash_for_correlation {
                    format!("EMAIL[{}]", self.hash_value(email))
                } else {
                    match email.split_once('@') {
                        Some((local, domain)) => format!(
                            "{}***@{}***",
                            local.chars().next().unwrap_or('*'),
                            domain.chars().next().unwrap_or('*')
                        ),
                        None => "***@***.com".to_string(),
                    }
                }
            })
            .to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                self.mask_phone(caps.get(0).map_or("", |m| m.as_str()))
            })
            .to_string()
    }

    fn redact_ip_addresses(&self, text: &str) -> String {
        IP_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let ip = caps.get(0).map_or("", |m| m.as_str());
                if self.config.hash_for_correlation {
                    format!("IP[{}]", self.hash_value(ip))
                } else {
                    let parts: Vec<&str> = ip.split('.').collect();
                    match (parts.first(), parts.last()) {
                        (Some(first), Some(last)) if parts.len() == 4 => {
                            format!("{first}.***.***.{last}")
                        }
                        _ => "***.***.***.***".to_string(),
                    }
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        // First 8 bytes are plenty for correlation
        general_purpose::STANDARD.encode(digest.get(..8).unwrap_or_default())
    }
}

/// Mask a phone number with the shared redactor
pub fn mask_phone(phone: &str) -> String {
    PiiRedactor::shared().mask_phone(phone)
}

/// Redact free text with the shared redactor
pub fn redact(text: &str) -> String {
    PiiRedactor::shared().redact(text)
}
