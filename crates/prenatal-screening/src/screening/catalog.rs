use serde::{Deserialize, Serialize};

use super::domain::Category;
use super::rules::BLOOD_PRESSURE_PROMPT;

/// How the form renders a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionInput {
    Radio,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub text: String,
    pub options: Vec<String>,
    pub category: Category,
    pub input: QuestionInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Questions shown by the form. Not every question feeds the rule table.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn for_category(&self, category: Category) -> Vec<&QuestionDefinition> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }
}

const YES_NO: &[&str] = &["Ya", "Tidak"];

fn radio(category: Category, text: &str, options: &[&str]) -> QuestionDefinition {
    QuestionDefinition {
        text: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        category,
        input: QuestionInput::Radio,
        unit: None,
    }
}

fn standard_questions() -> Vec<QuestionDefinition> {
    use Category::*;

    vec![
        QuestionDefinition {
            text: BLOOD_PRESSURE_PROMPT.to_string(),
            options: Vec::new(),
            category: ClinicalSigns,
            input: QuestionInput::Input,
            unit: Some("mmHg".to_string()),
        },
        radio(ClinicalSigns, "Apakah anda mengalami kondisi sulit tidur/cemas belebih?", YES_NO),
        radio(
            ClinicalSigns,
            "Apakah anda mengalami stress emosional, dan kondisi tertekan belakangan ini?",
            YES_NO,
        ),
        radio(
            ClinicalSigns,
            "Apakah Anda merasa pusing atau sering mengalami sakit kepala hebat yang tidak biasa?",
            YES_NO,
        ),
        radio(ClinicalSigns, "Apakah Anda mengalami keluar cairan dari jalan lahir?", YES_NO),
        radio(ClinicalSigns, "Apakah Anda merasa sesak napas atau sulit bernapas?", YES_NO),
        radio(
            ClinicalSigns,
            "Apakah Anda mengalami kontraksi rahim atau nyeri yang berulang-ulang?",
            YES_NO,
        ),
        radio(
            ClinicalSigns,
            "Apakah Anda mengalami perubahan mendadak pada penglihatan, seperti kilatan cahaya atau penglihatan kabur?",
            YES_NO,
        ),
        radio(
            ClinicalSigns,
            "Apakah Anda mengalami pembengkakan pada area telapak kaki atau wajah?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah Anda mengalami tekanan darah tinggi sebelumnya atau memiliki riwayat preeklampsia?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah anda sedang/pernah mengidap penyakit Diabetes Melitus (kencing manis)?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah anda sedang/pernah mengidap penyakit ginjal?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah anda sedang/pernah mengidap penyakit auto imun atau sakit lupus?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah mempunyai kebiasaan merokok sebelum hamil?",
            &["Tidak", "Dulu saya pernah merokok tetapi saat ini sudah berhenti"],
        ),
        radio(
            PersonalHealthHistory,
            "Apakah suami atau keluarga satu rumah anda aktif dalam merokok?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Apakah ini adalah kehamilan pertama anda?",
            YES_NO,
        ),
        radio(
            PersonalHealthHistory,
            "Jika anda sudah pernah melahirkan sebelumnya, berapakah jarak kehamilan terakhir dengan kehamilan saat ini?",
            &[
                "jarak kehamilan > 2 tahun - 10 tahun",
                "Jarak kehamilan > 10 tahun",
                "jarak kehamilan < 2 tahun",
            ],
        ),
        radio(
            FamilyHealthHistory,
            "Apakah Ibu atau saudara perempuan anda mempunyai penyakit hipertensi/darah tinggi?",
            YES_NO,
        ),
        radio(
            FamilyHealthHistory,
            "Apakah Ibu atau saudara perempuan anda mempunyai penyakit diabetes mellitus/ kencing manis?",
            YES_NO,
        ),
        radio(
            DietaryHabits,
            "Apakah anda mempunyai kebiasaan makan makanan yang berasa asin?",
            &[
                "Ya",
                "Kadang - kadang saya mengkonsumsi makanan yang berasa asin (seminggu 3 kali)",
                "Ya, hampir setiap hari saya mengkonsumsi makanan yang berasa asin",
            ],
        ),
        radio(
            DietaryHabits,
            "Apakah anda mempunyai kebiasaan mengkonsumsi kopi sehari hari?",
            &[
                "Tidak, saya tidak pernah mengkonsumsi kopi",
                "Sebulan 1-2 kali saya mengkonsumsi kopi",
                "Ya, hampir setiap hari saya mengkonsumsi kopi",
            ],
        ),
        radio(
            DietaryHabits,
            "Apakah anda sering mengkonsumsi makanan berlemak / bersantan sehari hari?",
            YES_NO,
        ),
        radio(
            DietaryHabits,
            "Apakah anda sering mengkonsumsi makanan cepat saji (KFC, McDonald, dll) sehari hari?",
            YES_NO,
        ),
        radio(
            DietaryHabits,
            "Apakah anda sering mengkonsumsi minuman manis / minuman kemasan sehari hari?",
            YES_NO,
        ),
    ]
}
