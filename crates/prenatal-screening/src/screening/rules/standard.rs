use super::super::domain::{Category, RiskWeight};
use super::{CategoryRules, Criterion};

pub(crate) const BLOOD_PRESSURE_PROMPT: &str = "Berapakah hasil tekanan darah ibu terakhir yang di ukur oleh petugas RS atau Puskesmas? (hasil tekanan darah dapat di lihat pada buku KIA)";

const HYPERTENSIVE_SYSTOLIC_MMHG: f64 = 140.0;
const HYPERTENSIVE_DIASTOLIC_MMHG: f64 = 90.0;

pub(crate) fn standard_rules() -> Vec<CategoryRules> {
    use RiskWeight::{High, Medium};

    vec![
        CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![
                Criterion::blood_pressure(
                    "klinis.blood_pressure",
                    BLOOD_PRESSURE_PROMPT,
                    High,
                    HYPERTENSIVE_SYSTOLIC_MMHG,
                    HYPERTENSIVE_DIASTOLIC_MMHG,
                ),
                Criterion::affirmative(
                    "klinis.amniotic_fluid_leak",
                    "Apakah Anda mengalami keluar cairan dari jalan lahir?",
                    High,
                ),
                Criterion::affirmative(
                    "klinis.recurrent_contractions",
                    "Apakah Anda mengalami kontraksi rahim atau nyeri yang berulang-ulang?",
                    High,
                ),
                Criterion::affirmative(
                    "klinis.edema",
                    "Apakah Anda mengalami pembengkakan pada area telapak kaki atau wajah?",
                    Medium,
                ),
                Criterion::affirmative(
                    "klinis.shortness_of_breath",
                    "Apakah Anda merasa sesak napas atau sulit bernapas?",
                    High,
                ),
                Criterion::affirmative(
                    "klinis.vision_changes",
                    "Apakah Anda mengalami perubahan mendadak pada penglihatan, seperti kilatan cahaya atau penglihatan kabur?",
                    High,
                ),
                Criterion::affirmative(
                    "klinis.severe_headache",
                    "Apakah Anda merasa pusing atau sering mengalami sakit kepala hebat yang tidak biasa?",
                    Medium,
                ),
            ],
        },
        CategoryRules {
            category: Category::PersonalHealthHistory,
            criteria: vec![
                Criterion::affirmative(
                    "kesehatan_diri.hypertension_or_preeclampsia",
                    "Apakah Anda mengalami tekanan darah tinggi sebelumnya atau memiliki riwayat preeklampsia?",
                    High,
                ),
                Criterion::affirmative(
                    "kesehatan_diri.diabetes",
                    "Apakah anda sedang/pernah mengidap penyakit Diabetes Melitus (kencing manis)?",
                    High,
                ),
                Criterion::affirmative(
                    "kesehatan_diri.kidney_disease",
                    "Apakah anda sedang/pernah mengidap penyakit ginjal?",
                    High,
                ),
                Criterion::affirmative(
                    "kesehatan_diri.autoimmune_or_lupus",
                    "Apakah anda sedang/pernah mengidap penyakit auto imun atau sakit lupus?",
                    High,
                ),
            ],
        },
        CategoryRules {
            category: Category::FamilyHealthHistory,
            criteria: vec![
                Criterion::affirmative(
                    "kesehatan_keluarga.hypertension",
                    "Apakah Ibu atau saudara perempuan anda mempunyai penyakit hipertensi/darah tinggi?",
                    Medium,
                ),
                Criterion::affirmative(
                    "kesehatan_keluarga.diabetes",
                    "Apakah Ibu atau saudara perempuan anda mempunyai penyakit diabetes mellitus/ kencing manis?",
                    Medium,
                ),
            ],
        },
        CategoryRules {
            category: Category::DietaryHabits,
            criteria: vec![
                Criterion::affirmative(
                    "konsumsi_makanan.salty_food",
                    "Apakah anda mempunyai kebiasaan makan makanan yang berasa asin?",
                    Medium,
                ),
                Criterion::affirmative(
                    "konsumsi_makanan.fatty_food",
                    "Apakah anda sering mengkonsumsi makanan berlemak / bersantan sehari hari?",
                    Medium,
                ),
                Criterion::affirmative(
                    "konsumsi_makanan.fast_food",
                    "Apakah anda sering mengkonsumsi makanan cepat saji (KFC, McDonald, dll) sehari hari?",
                    Medium,
                ),
                Criterion::affirmative(
                    "konsumsi_makanan.sweet_drinks",
                    "Apakah anda sering mengkonsumsi minuman manis / minuman kemasan sehari hari?",
                    Medium,
                ),
            ],
        },
    ]
}
