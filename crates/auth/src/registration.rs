use super::*;

const DEFAULT_AGE: u32 = 25;
const DEFAULT_WEIGHT: u32 = 70;

/// Registration form as submitted by the web client.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub account_type: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub selected_sports: Vec<String>,
    pub gender: Option<String>,
}

impl RegisterRequest {
    /// Checks the form field by field and builds the account it describes,
    /// under a fresh uid. The first failing field is reported.
    pub fn validate(&self) -> Result<Member, AuthError> {
        let full_name = Self::required("fullName", &self.full_name)?;
        let email = Self::required("email", &self.email)?;
        let phone = Self::required("phone", &self.phone)?;
        let account_type = Self::required("accountType", &self.account_type)?;
        let password = Self::required("password", &self.password)?;
        let gender = Self::required("gender", &self.gender)?;
        Self::email(email)?;
        Self::phone(phone)?;
        let role = Role::try_from(account_type)?;
        Self::password(password, self.confirm_password.as_deref().unwrap_or_default())?;
        let sports = self
            .selected_sports
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        if sports.is_empty() {
            return Err(AuthError::invalid(
                "selectedSports",
                "Please select at least one sport",
            ));
        }
        let age = Self::bounded("age", self.age.unwrap_or(DEFAULT_AGE), 1..=120)?;
        let weight = Self::bounded("weight", self.weight.unwrap_or(DEFAULT_WEIGHT), 1..=500)?;
        Ok(Member {
            uid: uuid::Uuid::now_v7().to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            age,
            weight,
            role,
            state: self.state.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            sports,
            gender: gender.to_string(),
        })
    }

    fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, AuthError> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AuthError::required(field))
    }
    fn email(email: &str) -> Result<(), AuthError> {
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(())
            }
            _ => Err(AuthError::invalid("email", "Please enter a valid email address")),
        }
    }
    fn phone(phone: &str) -> Result<(), AuthError> {
        match phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
            true => Ok(()),
            false => Err(AuthError::invalid(
                "phone",
                "Phone number must be exactly 10 digits",
            )),
        }
    }
    fn password(candidate: &str, confirm: &str) -> Result<(), AuthError> {
        let strength = password::strength(candidate);
        if strength.score < password::MIN_STRENGTH {
            return Err(AuthError::invalid(
                "password",
                strength.unmet.join("; "),
            ));
        }
        if candidate != confirm {
            return Err(AuthError::invalid("confirmPassword", "Passwords do not match"));
        }
        Ok(())
    }
    fn bounded(
        field: &'static str,
        value: u32,
        range: std::ops::RangeInclusive<u32>,
    ) -> Result<u32, AuthError> {
        match range.contains(&value) {
            true => Ok(value),
            false => Err(AuthError::invalid(
                field,
                format!("{} must be between {} and {}", field, range.start(), range.end()),
            )),
        }
    }
}
