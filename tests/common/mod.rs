pub mod wiremock_helpers;

use brandaudit::Submission;

pub fn test_submission() -> Submission {
    Submission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        company: "Acme Corp".to_string(),
        address: "1 Main St".to_string(),
        phone: "555-1234".to_string(),
        website: "https://acme.com".to_string(),
    }
}
