//! The flat record handed to the resume assembler.

use crate::error::ResumeError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub work_email: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    #[serde(default)]
    pub google_scholar_url: String,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leadership: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub period: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub period: String,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_link: Option<String>,
}

/// Four fixed categories, rendered in this order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub programming: Vec<String>,
    pub ml: Vec<String>,
    pub hpc: Vec<String>,
    pub simulation: Vec<String>,
}

impl Skills {
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Programming", &self.programming),
            ("Machine Learning", &self.ml),
            ("HPC & Cloud", &self.hpc),
            ("Simulation & CAE", &self.simulation),
        ]
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ResumeError> {
    if value.trim().is_empty() {
        return Err(ResumeError::MissingField(field));
    }
    Ok(())
}

fn require_in(
    value: &str,
    section: &'static str,
    index: usize,
    field: &'static str,
) -> Result<(), ResumeError> {
    if value.trim().is_empty() {
        return Err(ResumeError::IncompleteEntry {
            section,
            index,
            field,
        });
    }
    Ok(())
}

impl ResumeData {
    pub fn validate(&self) -> Result<(), ResumeError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        for (i, e) in self.education.iter().enumerate() {
            require_in(&e.institution, "education", i, "institution")?;
            require_in(&e.degree, "education", i, "degree")?;
            require_in(&e.period, "education", i, "period")?;
        }
        for (i, e) in self.experience.iter().enumerate() {
            require_in(&e.company, "experience", i, "company")?;
            require_in(&e.role, "experience", i, "role")?;
            require_in(&e.period, "experience", i, "period")?;
        }
        for (i, p) in self.projects.iter().enumerate() {
            require_in(&p.title, "projects", i, "title")?;
        }
        Ok(())
    }

    /// `Resume_<Name_With_Underscores>.pdf`
    pub fn download_filename(&self) -> String {
        download_filename(&self.name)
    }
}

pub fn download_filename(name: &str) -> String {
    let joined: Vec<&str> = name.split_whitespace().collect();
    format!("Resume_{}.pdf", joined.join("_"))
}

/// Printable-ASCII stand-in for `filename` that is safe inside a quoted
/// string. Quotes, backslashes and anything outside ASCII become `_`.
pub fn ascii_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c == ' ' || c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect()
}

// RFC 5987 attr-char
fn is_attr_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&b)
}

fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        if is_attr_char(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

fn percent_decode(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            out.push(u8::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// `Content-Disposition` value that makes browsers save the PDF as `filename`.
/// Names that do not survive as a plain quoted string also get an RFC 5987
/// `filename*` parameter; the whole value is always ASCII.
pub fn attachment_disposition(filename: &str) -> String {
    let fallback = ascii_filename(filename);
    if fallback == filename {
        format!("attachment; filename=\"{}\"", fallback)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            percent_encode(filename)
        )
    }
}

/// Filename carried by a `Content-Disposition` value. An RFC 5987
/// `filename*` wins over a quoted or bare `filename`.
pub fn disposition_filename(header: &str) -> Option<String> {
    if let Some(idx) = header.find("filename*=") {
        let value = header[idx + "filename*=".len()..].split(';').next()?.trim();
        let encoded = value
            .strip_prefix("UTF-8''")
            .or_else(|| value.strip_prefix("utf-8''"));
        if let Some(name) = encoded.and_then(percent_decode) {
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
    let rest = &header[header.find("filename=")? + "filename=".len()..];
    let name = match rest.strip_prefix('"') {
        Some(quoted) => &quoted[..quoted.find('"')?],
        None => rest.split(';').next()?.trim(),
    };
    (!name.is_empty()).then(|| name.to_string())
}
