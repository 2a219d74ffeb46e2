use unicode_normalization::UnicodeNormalization;

/// Normalizes raw OCR output ahead of key extraction.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds fullwidth digits (１２３) to ASCII
        let text: String = text.nfkc().collect();

        // Line breaks become separators so digit runs never merge across lines
        text.replace("\r\n", "\n")
            .replace(['\n', '\r'], " ")
            .trim()
            .to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
