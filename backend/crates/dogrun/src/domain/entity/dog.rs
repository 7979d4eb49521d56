//! Dog Entity

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use kernel::id::{DogId, UserId};
use kernel::validation::is_vaccine_up_to_date;

use crate::domain::value_object::{breed::Breed, required_text, weight::Weight};
use crate::error::InvalidField;

/// Earliest birth year accepted on a dog profile
const MIN_BIRTH_YEAR: i32 = 1980;

/// Owner-editable dog attributes
#[derive(Debug, Clone, PartialEq)]
pub struct DogProfile {
    pub name: String,
    pub breed: Breed,
    pub weight: Weight,
    /// Traits in the order the owner listed them
    pub personality: Vec<String>,
    pub birth_year: Option<i32>,
    pub last_vaccination_date: Option<NaiveDate>,
}

impl DogProfile {
    /// Validate raw input
    ///
    /// `last_vaccination_date` is `YYYY-MM-DD`; blank means unknown.
    pub fn new(
        name: &str,
        breed: &str,
        weight: &str,
        personality: Vec<String>,
        birth_year: Option<i32>,
        last_vaccination_date: Option<&str>,
    ) -> Result<Self, InvalidField> {
        let name = required_text("name", name)?;
        let breed = Breed::new(breed)?;
        let weight = Weight::new(weight)?;

        let personality = personality
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let current_year = Utc::now().year();
        if let Some(year) = birth_year {
            if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
                return Err(InvalidField::new(
                    "birthYear",
                    format!("must be between {MIN_BIRTH_YEAR} and {current_year}"),
                ));
            }
        }

        let last_vaccination_date = match last_vaccination_date.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| InvalidField::new("lastVaccinationDate", "expected YYYY-MM-DD"))?,
            ),
        };

        Ok(Self {
            name,
            breed,
            weight,
            personality,
            birth_year,
            last_vaccination_date,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Dog {
    pub dog_id: DogId,
    pub owner_id: UserId,
    pub profile: DogProfile,
    /// Upload directory joined with the stored file name
    pub photo_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dog {
    pub fn new(owner_id: UserId, profile: DogProfile) -> Self {
        let now = Utc::now();

        Self {
            dog_id: DogId::new(),
            owner_id,
            profile,
            photo_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(&mut self, profile: DogProfile) {
        self.profile = profile;
        self.updated_at = Utc::now();
    }

    pub fn set_photo(&mut self, photo_path: String) {
        self.photo_path = Some(photo_path);
        self.updated_at = Utc::now();
    }

    /// False when no vaccination is on record
    pub fn is_vaccine_up_to_date(&self, months_valid: u32) -> bool {
        self.profile
            .last_vaccination_date
            .is_some_and(|date| is_vaccine_up_to_date(date, months_valid))
    }
}
