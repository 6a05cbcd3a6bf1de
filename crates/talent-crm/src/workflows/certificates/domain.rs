use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Certificate rank inferred from free text. `Other` is never produced by the
/// standard vocabulary; intake assigns it when text exists but nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateLevel {
    FirstClass,
    SecondClass,
    SeniorEngineer,
    MidEngineer,
    JuniorEngineer,
    ClassA,
    ClassB,
    ClassC,
    Other,
}

impl CertificateLevel {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::FirstClass,
            Self::SecondClass,
            Self::SeniorEngineer,
            Self::MidEngineer,
            Self::JuniorEngineer,
            Self::ClassA,
            Self::ClassB,
            Self::ClassC,
            Self::Other,
        ]
    }

    /// Persisted column value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstClass => "一级",
            Self::SecondClass => "二级",
            Self::SeniorEngineer => "高级工程师",
            Self::MidEngineer => "中级工程师",
            Self::JuniorEngineer => "初级工程师",
            Self::ClassA => "三类人员A类",
            Self::ClassB => "三类人员B类",
            Self::ClassC => "三类人员C类",
            Self::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == label)
    }
}

impl fmt::Display for CertificateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Broad grouping of the specialty catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialtyFamily {
    Constructor,
    ProfessionalEngineer,
    SafetyManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateSpecialty {
    Architecture,
    Municipal,
    MechanicalElectrical,
    Highway,
    WaterConservancy,
    Mining,
    Railway,
    CivilAviation,
    PortAndWaterway,
    TelecomAndBroadcast,
    ArchitecturalEngineer,
    StructuralEngineer,
    ElectricalEngineer,
    PlumbingEngineer,
    HvacEngineer,
    ArchitecturalDesignEngineer,
    CostEngineer,
    SurveyingEngineer,
    GeotechnicalEngineer,
    MaterialsEngineer,
    SafetyManagement,
}

impl CertificateSpecialty {
    pub const fn ordered() -> [Self; 21] {
        [
            Self::Architecture,
            Self::Municipal,
            Self::MechanicalElectrical,
            Self::Highway,
            Self::WaterConservancy,
            Self::Mining,
            Self::Railway,
            Self::CivilAviation,
            Self::PortAndWaterway,
            Self::TelecomAndBroadcast,
            Self::ArchitecturalEngineer,
            Self::StructuralEngineer,
            Self::ElectricalEngineer,
            Self::PlumbingEngineer,
            Self::HvacEngineer,
            Self::ArchitecturalDesignEngineer,
            Self::CostEngineer,
            Self::SurveyingEngineer,
            Self::GeotechnicalEngineer,
            Self::MaterialsEngineer,
            Self::SafetyManagement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Architecture => "建筑工程",
            Self::Municipal => "市政公用工程",
            Self::MechanicalElectrical => "机电工程",
            Self::Highway => "公路工程",
            Self::WaterConservancy => "水利水电工程",
            Self::Mining => "矿业工程",
            Self::Railway => "铁路工程",
            Self::CivilAviation => "民航机场工程",
            Self::PortAndWaterway => "港口与航道工程",
            Self::TelecomAndBroadcast => "通信与广电工程",
            Self::ArchitecturalEngineer => "建筑工程师",
            Self::StructuralEngineer => "结构工程师",
            Self::ElectricalEngineer => "电气工程师",
            Self::PlumbingEngineer => "给排水工程师",
            Self::HvacEngineer => "暖通工程师",
            Self::ArchitecturalDesignEngineer => "建筑设计工程师",
            Self::CostEngineer => "工程造价工程师",
            Self::SurveyingEngineer => "测绘工程师",
            Self::GeotechnicalEngineer => "岩土工程师",
            Self::MaterialsEngineer => "建筑材料工程师",
            Self::SafetyManagement => "安全管理",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|specialty| specialty.label() == label)
    }

    pub const fn family(self) -> SpecialtyFamily {
        match self {
            Self::Architecture
            | Self::Municipal
            | Self::MechanicalElectrical
            | Self::Highway
            | Self::WaterConservancy
            | Self::Mining
            | Self::Railway
            | Self::CivilAviation
            | Self::PortAndWaterway
            | Self::TelecomAndBroadcast => SpecialtyFamily::Constructor,
            Self::SafetyManagement => SpecialtyFamily::SafetyManagement,
            _ => SpecialtyFamily::ProfessionalEngineer,
        }
    }
}

impl fmt::Display for CertificateSpecialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the talent's social insurance is held exclusively or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialSecurityStatus {
    None,
    Unique,
}

impl SocialSecurityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "无社保",
            Self::Unique => "唯一社保",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "无社保" => Some(Self::None),
            "唯一社保" => Some(Self::Unique),
            _ => None,
        }
    }
}

impl fmt::Display for SocialSecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two free-text fields a talent record carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    #[serde(default)]
    pub certificate_text: Option<String>,
    #[serde(default)]
    pub communication_text: Option<String>,
}

impl ClassificationInput {
    pub fn new(certificate_text: Option<&str>, communication_text: Option<&str>) -> Self {
        Self {
            certificate_text: certificate_text.map(str::to_string),
            communication_text: communication_text.map(str::to_string),
        }
    }

    /// Working text the extractors scan, or `None` when both fields are blank.
    pub fn full_text(&self) -> Option<String> {
        super::input::assemble(
            self.certificate_text.as_deref(),
            self.communication_text.as_deref(),
        )
    }
}

/// Structured view of the free text. Every field is independently optional;
/// an all-empty result means the record needs manual review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub level: Option<CertificateLevel>,
    pub specialty: Option<CertificateSpecialty>,
    pub social_security: Option<SocialSecurityStatus>,
    pub contract_price: Option<f64>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl ClassificationResult {
    pub fn is_unclassified(&self) -> bool {
        self.level.is_none()
            && self.specialty.is_none()
            && self.social_security.is_none()
            && self.contract_price.is_none()
            && self.expiry_date.is_none()
    }
}
