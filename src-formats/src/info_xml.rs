//! `Info` chunk: the small MetaInfo XML document hosts show in their preset browsers.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UNKNOWN: &str = "Unknown";

/// Plug-in metadata stored in the `Info` chunk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub category: String,
    pub name: String,
    pub vendor: String,
}

impl PluginInfo {
    pub fn new(category: &str, name: &str, vendor: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            vendor: vendor.to_string(),
        }
    }

    /// Render the MetaInfo document as UTF-8 bytes with a BOM.
    ///
    /// Tab indented, CRLF line endings, XML declaration first. Empty fields
    /// are written as "Unknown".
    pub fn to_xml_bytes(&self) -> Vec<u8> {
        let attributes = [
            ("MediaType", "VstPreset"),
            ("PlugInCategory", or_unknown(&self.category)),
            ("PlugInName", or_unknown(&self.name)),
            ("PlugInVendor", or_unknown(&self.vendor)),
        ];

        let mut lines = vec![
            r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
            "<MetaInfo>".to_string(),
        ];
        for (id, value) in attributes {
            lines.push(format!(
                "\t<Attribute id=\"{}\" value=\"{}\" type=\"string\" flags=\"writeProtected\" />",
                id,
                escape(value)
            ));
        }
        lines.push("</MetaInfo>".to_string());

        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(lines.join("\r\n").as_bytes());
        bytes
    }

    /// Extract category, name and vendor from an Info chunk.
    ///
    /// Missing attributes stay empty. A missing BOM is accepted.
    pub fn from_xml_bytes(bytes: &[u8]) -> Self {
        let body = bytes.strip_prefix(&BOM).unwrap_or(bytes);
        let text = String::from_utf8_lossy(body);

        let mut info = PluginInfo::default();
        let (Some(element_re), Some(attr_re)) = (attribute_element_re(), attribute_re()) else {
            return info;
        };
        for element in element_re.captures_iter(&text) {
            let mut id = None;
            let mut value = None;
            for attr in attr_re.captures_iter(&element[1]) {
                match &attr[1] {
                    "id" => id = Some(unescape(&attr[2])),
                    "value" => value = Some(unescape(&attr[2])),
                    _ => {}
                }
            }
            let (Some(id), Some(value)) = (id, value) else {
                continue;
            };
            match id.as_str() {
                "PlugInCategory" => info.category = value,
                "PlugInName" => info.name = value,
                "PlugInVendor" => info.vendor = value,
                _ => {}
            }
        }
        info
    }
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() { UNKNOWN } else { s }
}

fn attribute_element_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<Attribute\s+([^>]*?)/?>").ok())
        .as_ref()
}

fn attribute_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*"([^"]*)""#).ok())
        .as_ref()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
