use url::Url;
use whatlang::Lang;

use crate::filters::{EligibilityFilter, RejectReason};

// Detection runs over a leading slice only; full articles add latency
// without improving whatlang's answer.
const SAMPLE_CHARS: usize = 200;
const MIN_CONFIDENCE: f64 = 0.25;

/// Keeps only articles whose detected language matches the target code.
/// Fail-closed: undetectable or low-confidence text is rejected, never
/// accepted by default.
pub struct LanguageFilter {
    target: String,
}

impl LanguageFilter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into().to_lowercase(),
        }
    }

    fn detect(text: &str) -> Option<String> {
        let sample: String = text.chars().take(SAMPLE_CHARS).collect();
        let info = whatlang::detect(&sample)?;
        if info.confidence() < MIN_CONFIDENCE {
            return None;
        }
        Some(lang_code(info.lang()))
    }
}

impl EligibilityFilter for LanguageFilter {
    fn name(&self) -> &'static str {
        "language"
    }

    fn check(&self, _url: &Url, text: &str) -> Result<(), RejectReason> {
        match Self::detect(text) {
            Some(code) if code == self.target => Ok(()),
            detected => Err(RejectReason::Language { detected }),
        }
    }
}

fn lang_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Ita => "it".to_string(),
        Lang::Nld => "nl".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Kor => "ko".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn accepts_matching_language() {
        let filter = LanguageFilter::new("en");
        let text = "This is a perfectly normal English sentence about technology news \
                    and the people who write it.";
        assert!(filter.check(&url(), text).is_ok());
    }

    #[test]
    fn rejects_other_language() {
        let filter = LanguageFilter::new("en");
        let text = "Esto es una prueba del sistema de detección de idiomas en español. \
                    Debería rechazar este texto.";
        let err = filter.check(&url(), text).unwrap_err();
        assert!(matches!(
            err,
            RejectReason::Language {
                detected: Some(code)
            } if code != "en"
        ));
    }

    #[test]
    fn detection_failure_rejects() {
        let filter = LanguageFilter::new("en");
        let gibberish = "1 2 3 4 5 6 7 8 9 0 ! @ # $ % ^ & * ( ) - = + [ ] { }";
        let err = filter.check(&url(), gibberish).unwrap_err();
        assert_eq!(err, RejectReason::Language { detected: None });
    }
}
