//! Category suggestion
//!
//! Given a vendor, amount and optional description, a [`CategorySuggester`]
//! proposes a category name with a confidence score. The proposal is then
//! matched case-insensitively against the existing categories; a match
//! pre-selects that category, anything else is only shown as text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money};
use crate::storage::CategoryRepository;

/// Input to a suggestion request
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub vendor: String,
    pub amount: Money,
    pub description: Option<String>,
}

impl SuggestionRequest {
    pub fn new(vendor: impl Into<String>, amount: Money) -> Self {
        Self {
            vendor: vendor.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    /// A suggestion needs a vendor and a positive amount
    pub fn validate(&self) -> TrackerResult<()> {
        if self.vendor.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Vendor is required to suggest a category.".into(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(TrackerError::Validation(
                "A positive amount is required to suggest a category.".into(),
            ));
        }
        Ok(())
    }
}

/// Wire form of the request body
#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    vendor: &'a str,
    amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a SuggestionRequest> for RequestBody<'a> {
    fn from(request: &'a SuggestionRequest) -> Self {
        Self {
            vendor: request.vendor.trim(),
            amount: request.amount.as_decimal(),
            description: request.description.as_deref(),
        }
    }
}

/// A proposed category name and how sure the suggester is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub confidence: f64,
}

impl Suggestion {
    fn check(self) -> TrackerResult<Self> {
        if self.category.trim().is_empty() {
            return Err(TrackerError::Suggestion(
                "service returned an empty category".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(TrackerError::Suggestion(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }
        Ok(self)
    }

    /// Confidence as a whole percentage for display
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Something that can propose a category for an expense
pub trait CategorySuggester {
    fn suggest(&self, request: &SuggestionRequest) -> TrackerResult<Suggestion>;
}

/// Suggester backed by a remote JSON service
///
/// Sends `POST {endpoint}` with `{vendor, amount, description?}` and expects
/// `{category, confidence}` back.
#[derive(Debug, Clone)]
pub struct HttpSuggester {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSuggester {
    /// The request waits for the service without a deadline
    pub fn new(endpoint: impl Into<String>) -> TrackerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| TrackerError::Suggestion(format!("client build failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CategorySuggester for HttpSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> TrackerResult<Suggestion> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RequestBody::from(request))
            .send()
            .map_err(|e| TrackerError::Suggestion(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Suggestion(format!(
                "service responded with status {}",
                status.as_u16()
            )));
        }

        response
            .json::<Suggestion>()
            .map_err(|e| TrackerError::Suggestion(format!("malformed response: {e}")))?
            .check()
    }
}

/// Offline suggester matching keywords in the vendor and description
///
/// Used when no suggestion endpoint is configured.
#[derive(Debug, Clone)]
pub struct KeywordSuggester {
    rules: Vec<KeywordRule>,
}

#[derive(Debug, Clone)]
struct KeywordRule {
    keyword: String,
    category: String,
}

const DEFAULT_KEYWORDS: &[(&str, &str)] = &[
    ("mart", "Groceries"),
    ("market", "Groceries"),
    ("grocer", "Groceries"),
    ("electric", "Utilities"),
    ("gas", "Utilities"),
    ("water", "Utilities"),
    ("internet", "Utilities"),
    ("rent", "Rent/Mortgage"),
    ("mortgage", "Rent/Mortgage"),
    ("transit", "Transportation"),
    ("uber", "Transportation"),
    ("fuel", "Transportation"),
    ("parking", "Transportation"),
    ("cinema", "Entertainment"),
    ("movie", "Entertainment"),
    ("concert", "Entertainment"),
    ("restaurant", "Dining Out"),
    ("cafe", "Dining Out"),
    ("coffee", "Dining Out"),
    ("pizza", "Dining Out"),
    ("dinner", "Dining Out"),
    ("pharmacy", "Healthcare"),
    ("clinic", "Healthcare"),
    ("doctor", "Healthcare"),
    ("clothing", "Shopping"),
    ("apparel", "Shopping"),
    ("airline", "Travel"),
    ("hotel", "Travel"),
    ("flight", "Travel"),
];

/// Category proposed when no keyword matches
const FALLBACK_CATEGORY: &str = "Other";

impl Default for KeywordSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSuggester {
    /// Build from `(keyword, category)` pairs; the first matching keyword wins
    pub fn new<'k>(rules: impl IntoIterator<Item = (&'k str, &'k str)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(keyword, category)| KeywordRule {
                keyword: keyword.to_lowercase(),
                category: category.to_string(),
            })
            .collect();
        Self { rules }
    }
}

impl CategorySuggester for KeywordSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> TrackerResult<Suggestion> {
        let vendor = request.vendor.to_lowercase();
        let description = request
            .description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        let vendor_hit = self.rules.iter().find(|r| vendor.contains(&r.keyword));
        let suggestion = match vendor_hit {
            Some(rule) => Suggestion {
                category: rule.category.clone(),
                confidence: 0.8,
            },
            None => match self.rules.iter().find(|r| description.contains(&r.keyword)) {
                Some(rule) => Suggestion {
                    category: rule.category.clone(),
                    confidence: 0.6,
                },
                None => Suggestion {
                    category: FALLBACK_CATEGORY.to_string(),
                    confidence: 0.2,
                },
            },
        };

        Ok(suggestion)
    }
}

/// Result of matching a suggestion against the known categories
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// The suggested name matches an existing category
    Matched {
        category: Category,
        suggestion: Suggestion,
    },
    /// No category has the suggested name; show it as text only
    Unmatched { suggestion: Suggestion },
}

impl SuggestionOutcome {
    pub fn suggestion(&self) -> &Suggestion {
        match self {
            Self::Matched { suggestion, .. } | Self::Unmatched { suggestion } => suggestion,
        }
    }

    pub fn category(&self) -> Option<&Category> {
        match self {
            Self::Matched { category, .. } => Some(category),
            Self::Unmatched { .. } => None,
        }
    }
}

/// Ask the suggester and resolve its answer against the category list
pub fn suggest_category(
    suggester: &dyn CategorySuggester,
    categories: &CategoryRepository,
    request: &SuggestionRequest,
) -> TrackerResult<SuggestionOutcome> {
    request.validate()?;
    let suggestion = suggester.suggest(request)?.check()?;

    Ok(match categories.get_by_name(&suggestion.category) {
        Some(category) => SuggestionOutcome::Matched {
            category: category.clone(),
            suggestion,
        },
        None => SuggestionOutcome::Unmatched { suggestion },
    })
}

/// The suggester for a configured endpoint, or the offline matcher
pub fn suggester_for(endpoint: Option<&str>) -> TrackerResult<Box<dyn CategorySuggester>> {
    match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
        Some(endpoint) => Ok(Box::new(HttpSuggester::new(endpoint)?)),
        None => Ok(Box::new(KeywordSuggester::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryIcon;

    struct FixedSuggester(TrackerResult<Suggestion>);

    impl CategorySuggester for FixedSuggester {
        fn suggest(&self, _request: &SuggestionRequest) -> TrackerResult<Suggestion> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(TrackerError::Suggestion(e.to_string())),
            }
        }
    }

    fn fixed(category: &str, confidence: f64) -> FixedSuggester {
        FixedSuggester(Ok(Suggestion {
            category: category.into(),
            confidence,
        }))
    }

    fn categories() -> CategoryRepository {
        CategoryRepository::new(vec![
            Category::new("Groceries", CategoryIcon::ShoppingCart),
            Category::new("Dining Out", CategoryIcon::Utensils),
        ])
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest::new("SuperMart", Money::from_cents(7550))
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let outcome =
            suggest_category(&fixed("groceries", 0.92), &categories(), &request()).unwrap();

        assert_eq!(outcome.category().unwrap().name, "Groceries");
        assert_eq!(outcome.suggestion().confidence_percent(), 92);
    }

    #[test]
    fn test_unknown_category_is_text_only() {
        let outcome = suggest_category(&fixed("Pets", 0.5), &categories(), &request()).unwrap();

        assert!(outcome.category().is_none());
        assert_eq!(outcome.suggestion().category, "Pets");
    }

    #[test]
    fn test_precondition_rejects_blank_vendor_and_zero_amount() {
        let suggester = fixed("Groceries", 0.9);

        let blank = SuggestionRequest::new("  ", Money::from_cents(100));
        assert!(suggest_category(&suggester, &categories(), &blank)
            .unwrap_err()
            .is_validation());

        let zero = SuggestionRequest::new("SuperMart", Money::zero());
        assert!(suggest_category(&suggester, &categories(), &zero)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_confidence_out_of_range_is_failure() {
        let err = suggest_category(&fixed("Groceries", 1.5), &categories(), &request()).unwrap_err();
        assert!(matches!(err, TrackerError::Suggestion(_)));
    }

    #[test]
    fn test_service_error_propagates() {
        let failing = FixedSuggester(Err(TrackerError::Suggestion("timeout".into())));
        let err = suggest_category(&failing, &categories(), &request()).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_keyword_suggester() {
        let suggester = KeywordSuggester::default();

        let vendor_hit = suggester.suggest(&request()).unwrap();
        assert_eq!(vendor_hit.category, "Groceries");

        let description_hit = suggester
            .suggest(
                &SuggestionRequest::new("Luigi's", Money::from_cents(6580))
                    .with_description(Some("Dinner with friends".into())),
            )
            .unwrap();
        assert_eq!(description_hit.category, "Dining Out");
        assert!(description_hit.confidence < vendor_hit.confidence);

        let miss = suggester
            .suggest(&SuggestionRequest::new("Zzz", Money::from_cents(100)))
            .unwrap();
        assert_eq!(miss.category, "Other");
    }

    #[test]
    fn test_request_body_shape() {
        let req = request().with_description(Some("Weekly".into()));
        let body = serde_json::to_value(RequestBody::from(&req)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"vendor": "SuperMart", "amount": 75.5, "description": "Weekly"})
        );
    }

    #[test]
    fn test_suggester_for_blank_endpoint_is_offline() {
        let suggester = suggester_for(Some("  ")).unwrap();
        assert_eq!(suggester.suggest(&request()).unwrap().category, "Groceries");
    }

    /// Serve one canned HTTP response after `delay`
    fn serve_once(status: &'static str, body: &'static str, delay: Duration) -> String {
        use std::io::{BufRead, BufReader, Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            std::thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            reader.get_mut().write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/suggest", addr)
    }

    #[test]
    fn test_http_suggester_waits_for_slow_service() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"category": "Groceries", "confidence": 0.9}"#,
            Duration::from_millis(1500),
        );
        let suggester = HttpSuggester::new(endpoint).unwrap();

        let outcome = suggest_category(&suggester, &categories(), &request()).unwrap();
        assert_eq!(outcome.category().unwrap().name, "Groceries");
    }

    #[test]
    fn test_http_error_status_is_suggestion_failure() {
        let endpoint = serve_once("503 Service Unavailable", "{}", Duration::ZERO);
        let suggester = HttpSuggester::new(endpoint).unwrap();

        let err = suggest_category(&suggester, &categories(), &request()).unwrap_err();
        assert!(matches!(err, TrackerError::Suggestion(_)));
        assert!(err.to_string().contains("503"));
    }
}
