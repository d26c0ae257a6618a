//! Book (catalog copy) model and related types

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// One physical copy in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    /// Accession number
    pub acc_no: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    pub supplier: String,
    /// Shelf call number
    pub call_no: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Book body for create and full update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Acc No, Title, and Author are required."))]
    pub acc_no: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Acc No, Title, and Author are required."))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Acc No, Title, and Author are required."))]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub call_no: String,
    /// Number or numeric string; blank or null means 0
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_price"
    )]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Price as sent by form clients
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceField {
    Amount(Decimal),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PriceField>::deserialize(deserializer)? {
        None => Ok(Decimal::ZERO),
        Some(PriceField::Amount(amount)) => Ok(amount),
        Some(PriceField::Text(text)) => match text.trim() {
            "" => Ok(Decimal::ZERO),
            trimmed => trimmed
                .parse::<Decimal>()
                .map_err(|_| de::Error::custom(format!("invalid price: {}", trimmed))),
        },
    }
}

impl BookInput {
    pub fn into_book(self, id: Uuid) -> Book {
        Book {
            id,
            acc_no: self.acc_no,
            title: self.title,
            author: self.author,
            genre: self.genre,
            publisher: self.publisher,
            supplier: self.supplier,
            call_no: self.call_no,
            price: self.price,
        }
    }
}

/// Record-store query for `GET /books`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct BookListQuery {
    /// Exact accession number
    pub acc_no: Option<String>,
}

/// Catalog screen filters and paging
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Case-insensitive match on accession number, title or author
    pub search: Option<String>,
    /// Genre name, `all` disables the filter
    pub genre: Option<String>,
    /// Page number (default: 1)
    pub page: Option<usize>,
    /// Books per page
    pub per_page: Option<usize>,
}

impl CatalogQuery {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = book.acc_no.to_lowercase().contains(&term)
                || book.title.to_lowercase().contains(&term)
                || book.author.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        match self.genre.as_deref() {
            None | Some("") => true,
            Some(g) if g.eq_ignore_ascii_case("all") => true,
            Some(g) => !book.genre.is_empty() && book.genre.to_lowercase() == g.to_lowercase(),
        }
    }
}
