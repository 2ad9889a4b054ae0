use regex::Regex;
use review_models::{Recommendation, ReviewForm, StarRating, SubmittedReviewInput, MAX_STARS, MIN_STARS};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

pub const AUTHOR_CHARS: (usize, usize) = (2, 30);
pub const TITLE_CHARS: (usize, usize) = (5, 100);
pub const DESCRIPTION_CHARS: (usize, usize) = (20, 1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Author,
    Email,
    Title,
    Description,
    Rating,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Author => "author",
            Field::Email => "email",
            Field::Title => "title",
            Field::Description => "description",
            Field::Rating => "rating",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be between {min} and {max} characters")]
    AuthorLength { min: usize, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Title must be between {min} and {max} characters")]
    TitleLength { min: usize, max: usize },
    #[error("Review must be between {min} and {max} characters")]
    DescriptionLength { min: usize, max: usize },
    #[error("Please select a rating")]
    MissingRating,
    #[error("Rating must be between 1 and 5 stars")]
    RatingOutOfRange,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::AuthorLength { .. } => Field::Author,
            FieldError::InvalidEmail => Field::Email,
            FieldError::TitleLength { .. } => Field::Title,
            FieldError::DescriptionLength { .. } => Field::Description,
            FieldError::MissingRating | FieldError::RatingOutOfRange => Field::Rating,
        }
    }
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation: {}", .0.len(), summary(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field(), error))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field() == field)
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn char_len_within(value: &str, (min, max): (usize, usize)) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn validate_author(author: &str) -> Result<(), FieldError> {
    let (min, max) = AUTHOR_CHARS;
    if char_len_within(author.trim(), AUTHOR_CHARS) {
        Ok(())
    } else {
        Err(FieldError::AuthorLength { min, max })
    }
}

/// Email is optional: empty input is accepted
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() || email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    let (min, max) = TITLE_CHARS;
    if char_len_within(title.trim(), TITLE_CHARS) {
        Ok(())
    } else {
        Err(FieldError::TitleLength { min, max })
    }
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    let (min, max) = DESCRIPTION_CHARS;
    if char_len_within(description.trim(), DESCRIPTION_CHARS) {
        Ok(())
    } else {
        Err(FieldError::DescriptionLength { min, max })
    }
}

pub fn validate_rating(rating: Option<f64>) -> Result<StarRating, FieldError> {
    let stars = rating.ok_or(FieldError::MissingRating)?;
    let (min, max) = (f64::from(MIN_STARS), f64::from(MAX_STARS));
    if !stars.is_finite() || stars.fract() != 0.0 || !(min..=max).contains(&stars) {
        return Err(FieldError::RatingOutOfRange);
    }
    StarRating::new(stars as u8).map_err(|_| FieldError::RatingOutOfRange)
}

/// Run every field validator and build the trusted input on success.
pub fn validate(form: &ReviewForm) -> Result<SubmittedReviewInput, ValidationErrors> {
    let mut errors = Vec::new();

    if let Err(e) = validate_author(&form.author) {
        errors.push(e);
    }
    if let Err(e) = validate_email(&form.email) {
        errors.push(e);
    }
    if let Err(e) = validate_title(&form.title) {
        errors.push(e);
    }
    if let Err(e) = validate_description(&form.description) {
        errors.push(e);
    }
    let rating = match validate_rating(form.rating) {
        Ok(rating) => Some(rating),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match rating {
        Some(rating) if errors.is_empty() => {
            let email = form.email.trim();
            Ok(SubmittedReviewInput {
                author: form.author.trim().to_string(),
                email: (!email.is_empty()).then(|| email.to_string()),
                title: form.title.trim().to_string(),
                description: form.description.trim().to_string(),
                rating,
                recommends: Recommendation::from(form.recommends),
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}
