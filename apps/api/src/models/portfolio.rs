use serde::{Deserialize, Serialize};

/// Anything rendered in a list that carries an explicit display position.
pub trait Ordered {
    fn order(&self) -> i32;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
    pub name_ar: String,
    pub name_en: String,
    pub bio_ar: String,
    pub bio_en: String,
    pub job_title_ar: String,
    pub job_title_en: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `YYYY-MM-DD`
    pub experience_start_date: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name_ar: String,
    pub name_en: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutSection {
    pub title_ar: String,
    pub title_en: String,
    pub content_ar: String,
    pub content_en: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub telegram: String,
    pub linkedin: String,
    pub facebook: String,
    pub whatsapp: String,
    pub rapidapi: String,
}

/// Everything the landing page needs in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResponse {
    pub profile: ProfileData,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<Skill>,
    pub about_sections: Vec<AboutSection>,
    pub contact: ContactInfo,
    pub age: i32,
    pub experience_years: i32,
}

impl Ordered for SocialLink {
    fn order(&self) -> i32 {
        self.order
    }
}

impl Ordered for Skill {
    fn order(&self) -> i32 {
        self.order
    }
}

impl Ordered for AboutSection {
    fn order(&self) -> i32 {
        self.order
    }
}

/// Clones `items` sorted ascending by `order`. Stable: ties keep declaration order.
pub fn sorted_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.order());
    sorted
}
