//! Query layer: combines the content store with date math into response
//! payloads. Every function is a pure read of `(store, today)`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::ContentStore;
use crate::dates::{
    age_in_years, detailed_age, detailed_experience, experience_years, format_date_ar,
    format_date_en, productivity_stats, Breakdown, DateMathError, ProductivityStats,
};
use crate::models::portfolio::{
    sorted_by_order, AboutSection, ContactInfo, PortfolioResponse, ProfileData, Skill, SocialLink,
};

pub const SERVICE_NAME: &str = "Ahmed Ayyad Portfolio API";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    #[serde(flatten)]
    pub profile: ProfileData,
    pub age: i32,
    pub experience_years: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeDetails {
    pub simple: i32,
    pub detailed: Breakdown,
    pub birth_date_ar: String,
    pub birth_date_en: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceDetails {
    pub simple: i32,
    pub detailed: Breakdown,
    pub start_date_ar: String,
    pub start_date_en: String,
    pub productivity: ProductivityStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedProfile {
    #[serde(flatten)]
    pub profile: ProfileData,
    pub age: AgeDetails,
    pub experience: ExperienceDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicStats {
    pub age: i32,
    pub experience_years: i32,
    pub skills_count: usize,
    pub social_links_count: usize,
    pub about_sections_count: usize,
}

/// Breakdown without `total_months`, as shown on the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownSummary {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
}

impl From<Breakdown> for BreakdownSummary {
    fn from(b: Breakdown) -> Self {
        Self {
            years: b.years,
            months: b.months,
            days: b.days,
            total_days: b.total_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductivitySummary {
    pub working_days: i64,
    pub working_hours: i64,
    pub weeks: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub basic: BasicStats,
    pub age_breakdown: BreakdownSummary,
    pub experience_breakdown: BreakdownSummary,
    pub productivity: ProductivitySummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Queries
// ────────────────────────────────────────────────────────────────────────────

pub fn get_portfolio(
    store: &ContentStore,
    today: NaiveDate,
) -> Result<PortfolioResponse, DateMathError> {
    Ok(PortfolioResponse {
        profile: store.profile.clone(),
        social_links: sorted_by_order(&store.social_links),
        skills: sorted_by_order(&store.skills),
        about_sections: sorted_by_order(&store.about_sections),
        contact: store.contact.clone(),
        age: age_in_years(&store.profile.birth_date, today)?,
        experience_years: experience_years(&store.profile.experience_start_date, today)?,
    })
}

pub fn get_profile(store: &ContentStore, today: NaiveDate) -> Result<ProfileSummary, DateMathError> {
    Ok(ProfileSummary {
        profile: store.profile.clone(),
        age: age_in_years(&store.profile.birth_date, today)?,
        experience_years: experience_years(&store.profile.experience_start_date, today)?,
    })
}

pub fn get_detailed_profile(
    store: &ContentStore,
    today: NaiveDate,
) -> Result<DetailedProfile, DateMathError> {
    let birth = &store.profile.birth_date;
    let start = &store.profile.experience_start_date;

    Ok(DetailedProfile {
        profile: store.profile.clone(),
        age: AgeDetails {
            simple: age_in_years(birth, today)?,
            detailed: detailed_age(birth, today)?,
            birth_date_ar: format_date_ar(birth)?,
            birth_date_en: format_date_en(birth)?,
        },
        experience: ExperienceDetails {
            simple: experience_years(start, today)?,
            detailed: detailed_experience(start, today)?,
            start_date_ar: format_date_ar(start)?,
            start_date_en: format_date_en(start)?,
            productivity: productivity_stats(start, today)?,
        },
    })
}

pub fn get_skills(store: &ContentStore) -> Vec<Skill> {
    sorted_by_order(&store.skills)
}

pub fn get_social_links(store: &ContentStore) -> Vec<SocialLink> {
    sorted_by_order(&store.social_links)
}

pub fn get_about(store: &ContentStore) -> Vec<AboutSection> {
    sorted_by_order(&store.about_sections)
}

pub fn get_contact(store: &ContentStore) -> ContactInfo {
    store.contact.clone()
}

pub fn get_stats(store: &ContentStore, today: NaiveDate) -> Result<StatsResponse, DateMathError> {
    let birth = &store.profile.birth_date;
    let start = &store.profile.experience_start_date;
    let productivity = productivity_stats(start, today)?;

    Ok(StatsResponse {
        basic: BasicStats {
            age: age_in_years(birth, today)?,
            experience_years: experience_years(start, today)?,
            skills_count: store.skills.len(),
            social_links_count: store.social_links.len(),
            about_sections_count: store.about_sections.len(),
        },
        age_breakdown: detailed_age(birth, today)?.into(),
        experience_breakdown: detailed_experience(start, today)?.into(),
        productivity: ProductivitySummary {
            working_days: productivity.working_days_estimate,
            working_hours: productivity.working_hours_estimate,
            weeks: productivity.weeks,
        },
    })
}

pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
    }
}
