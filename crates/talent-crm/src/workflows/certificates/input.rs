use super::normalizer::strip_invisible;

/// Joins the certificate and communication fields into the working text.
///
/// The communication text is appended after a single space only when it is
/// present and differs from the certificate text. Blank fields are dropped, and
/// `None` means there is nothing to classify. Invisible characters (BOM,
/// zero-width space) only count for the blank and duplicate checks; the working
/// text keeps them.
pub(crate) fn assemble(
    certificate_text: Option<&str>,
    communication_text: Option<&str>,
) -> Option<String> {
    let certificate = Field::new(certificate_text);
    let communication = Field::new(communication_text);

    match (certificate, communication) {
        (Some(certificate), Some(communication))
            if certificate.visible != communication.visible =>
        {
            Some(format!("{} {}", certificate.text, communication.text))
        }
        (Some(certificate), _) => Some(certificate.text.to_string()),
        (None, communication) => communication.map(|field| field.text.to_string()),
    }
}

struct Field<'a> {
    text: &'a str,
    visible: String,
}

impl<'a> Field<'a> {
    fn new(value: Option<&'a str>) -> Option<Self> {
        let text = value?.trim();
        let visible = strip_invisible(text).trim().to_string();
        if visible.is_empty() {
            return None;
        }

        Some(Self { text, visible })
    }
}
