//! Read-only snapshot of everything the portfolio serves.
//!
//! Built once in `main`, validated, then shared through `AppState` as
//! `Arc<ContentStore>`. There is no mutation API.

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::content::validation::validate_store;
use crate::models::portfolio::{AboutSection, ContactInfo, ProfileData, Skill, SocialLink};

#[derive(Debug, Clone)]
pub struct ContentStore {
    pub profile: ProfileData,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<Skill>,
    pub about_sections: Vec<AboutSection>,
    pub contact: ContactInfo,
}

impl ContentStore {
    /// Validates a store, logging every problem before failing.
    pub fn validated(self) -> Result<Self> {
        let errors = validate_store(&self);
        if !errors.is_empty() {
            for e in &errors {
                warn!("Content store: {e}");
            }
            bail!("content store failed validation ({} errors)", errors.len());
        }
        info!(
            "Content store ready: {} social links, {} skills, {} about sections",
            self.social_links.len(),
            self.skills.len(),
            self.about_sections.len()
        );
        Ok(self)
    }

    /// The published portfolio content.
    pub fn seeded() -> Self {
        Self {
            profile: ProfileData {
                name_ar: "أحمد عياد".into(),
                name_en: "Ahmed Ayyad".into(),
                bio_ar: "لا يمكنك أن تكون مثلي".into(),
                bio_en: "You can't be like me".into(),
                job_title_ar: "مطور سوفت وير".into(),
                job_title_en: "Software Developer".into(),
                birth_date: "2005-05-21".into(),
                experience_start_date: "2021-02-05".into(),
                profile_image: "profile.jpg".into(),
            },
            social_links: seeded_social_links(),
            skills: seeded_skills(),
            about_sections: seeded_about_sections(),
            contact: ContactInfo {
                email: "ahmedyad200@gmail.com".into(),
                phone: "+201068159910".into(),
                github: "https://github.com/ahmedayyad-dev".into(),
                telegram: "https://t.me/ayyad".into(),
                linkedin: "https://www.linkedin.com/in/ahmedayyad2/".into(),
                facebook: "https://www.facebook.com/ahmedyad200".into(),
                whatsapp: "https://wa.me/201068159910".into(),
                rapidapi: "https://rapidapi.com/user/ahmedyad200".into(),
            },
        }
    }
}

fn seeded_social_links() -> Vec<SocialLink> {
    [
        ("email", "mailto:ahmedyad200@gmail.com"),
        ("github", "https://github.com/ahmedayyad-dev"),
        ("linkedin", "https://www.linkedin.com/in/ahmedayyad2/"),
        ("phone", "tel:+201068159910"),
        ("whatsapp", "https://wa.me/201068159910"),
        ("telegram", "https://t.me/ayyad"),
        ("facebook", "https://www.facebook.com/ahmedyad200"),
        ("rapidapi", "https://rapidapi.com/user/ahmedyad200"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, url), order)| SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        // Icons share the link name.
        icon: name.to_string(),
        order,
    })
    .collect()
}

fn seeded_skills() -> Vec<Skill> {
    [
        ("بايثون", "Python"),
        ("FastAPI", "FastAPI"),
        ("REST APIs", "REST APIs"),
        ("ديبيان (لينكس)", "Debian (Linux)"),
        ("ريديس", "Redis"),
        ("البرمجة غير المتزامنة", "Async Programming"),
        ("أدوات الذكاء الاصطناعي", "AI Tools"),
        ("الأتمتة", "Automation"),
        ("Telethon", "Telethon"),
        ("Py-TgCalls", "Py-TgCalls"),
        ("yt-dlp", "yt-dlp"),
        ("Playwright", "Playwright"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name_ar, name_en), order)| Skill {
        name_ar: name_ar.to_string(),
        name_en: name_en.to_string(),
        order,
    })
    .collect()
}

fn seeded_about_sections() -> Vec<AboutSection> {
    vec![
        AboutSection {
            title_ar: "🌟 من أنا؟".into(),
            title_en: "🌟 Who Am I?".into(),
            content_ar: "أنا أحمد عياد، مطور برمجيات مستقل وشغوف بحلول الـ Backend المعتمدة على Python. تخصصي يكمن في بناء أنظمة الأتمتة المعقدة، وأركز حالياً بشكل كبير على تطوير بوتات Telegram عالية الكفاءة؛ وتحديداً بوتات التحميل من YouTube وبوتات تشغيل الوسائط، بالإضافة إلى التعامل الاحترافي مع دمج الـ APIs المتنوعة.".into(),
            content_en: "I'm Ahmed Ayyad, a freelance software developer passionate about Python-based Backend solutions. My specialty lies in building complex automation systems, currently focusing heavily on developing high-performance Telegram bots; specifically YouTube download bots and media playback bots, in addition to professional handling of various API integrations.".into(),
            order: 1,
        },
        AboutSection {
            title_ar: "🐧 فلسفتي التقنية".into(),
            title_en: "🐧 My Technical Philosophy".into(),
            content_ar: "أنا ملتزم تمامًا بالاعتماد على الأنظمة مفتوحة المصدر والبيئات التقنية المستقلة. Linux أولاً وأخيراً: أنا مستخدم عميق ومتعصب لنظام Linux (Debian)، وهذا الالتزام نابع من قناعتي بالاستقلالية التقنية والكفاءة العالية.".into(),
            content_en: "I am fully committed to relying on open-source systems and independent technical environments. Linux First and Last: I am a deep and devoted Linux (Debian) user, and this commitment stems from my conviction in technical independence and high efficiency.".into(),
            order: 2,
        },
        AboutSection {
            title_ar: "🏡 نمط الحياة".into(),
            title_en: "🏡 Lifestyle & Focus".into(),
            content_ar: "أعمل وأعيش بشكل مستقل، مما يمنحني الانضباط والقدرة على التركيز العميق الذي ينعكس مباشرة على جودة الكود والأداء النهائي للخدمات التي أقدمها. أبحث عن البيئات السمعية التي تساعد على الإبداع؛ ولذلك لا أستمع إلى الأغاني الشعبية وأفضل الموسيقى التي تعزز الهدوء والتركيز أثناء العمل.".into(),
            content_en: "I work and live independently, which gives me the discipline and ability to focus deeply, directly reflected in code quality and final service performance. I seek audio environments that aid creativity; therefore I don't listen to popular music and prefer music that enhances calm and focus while working.".into(),
            order: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_counts() {
        let store = ContentStore::seeded();
        assert_eq!(store.social_links.len(), 8);
        assert_eq!(store.skills.len(), 12);
        assert_eq!(store.about_sections.len(), 3);
    }

    #[test]
    fn test_seeded_orders_are_dense_from_one() {
        let store = ContentStore::seeded();
        let orders: Vec<i32> = store.skills.iter().map(|s| s.order).collect();
        assert_eq!(orders, (1..=12).collect::<Vec<_>>());
        assert_eq!(store.social_links[7].name, "rapidapi");
        assert_eq!(store.social_links[7].order, 8);
    }

    #[test]
    fn test_validated_accepts_seed() {
        assert!(ContentStore::seeded().validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_bad_email() {
        let mut store = ContentStore::seeded();
        store.contact.email = "ahmed at gmail".into();
        assert!(store.validated().is_err());
    }
}
