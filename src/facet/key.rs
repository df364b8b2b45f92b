use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FacetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKey {
    Shape,
    Material,
    Era,
    Usage,
}

const SHAPE_VALUES: &[&str] = &["원형", "원기둥형", "삼각형", "사각형", "인물형", "기하학형", "동물형"];

const MATERIAL_VALUES: &[&str] = &[
    "금속",
    "흙",
    "도자기",
    "돌",
    "옥/유리",
    "지류",
    "나무",
    "칠기",
    "복합재질",
    "합성재질",
];

const ERA_VALUES: &[&str] = &[
    "구석기",
    "신석기",
    "청동기",
    "철기",
    "초기철기",
    "원삼국",
    "낙랑",
    "고구려",
    "백제",
    "신라",
    "가야",
    "통일신라",
    "발해",
    "고려",
    "조선",
    "대한제국",
    "일제강점",
    "광복이후",
];

const USAGE_VALUES: &[&str] = &[
    "의생활",
    "식생활",
    "주생활",
    "산업/생업",
    "교통/통신",
    "전통과학",
    "사회생활",
    "종교신앙",
    "문화예술",
    "군사",
    "보건의료",
    "과학기술",
    "미디어",
    "기타",
];

impl FacetKey {
    pub const ALL: [FacetKey; 4] = [Self::Shape, Self::Material, Self::Era, Self::Usage];
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Self::Shape => 0,
            Self::Material => 1,
            Self::Era => 2,
            Self::Usage => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Material => "material",
            Self::Era => "era",
            Self::Usage => "usage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Shape => "형태",
            Self::Material => "재질",
            Self::Era => "시대",
            Self::Usage => "용도",
        }
    }

    /// Only shape values arrive as comma-delimited lists ("사각형, 원형").
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Shape)
    }

    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::Shape => SHAPE_VALUES,
            Self::Material => MATERIAL_VALUES,
            Self::Era => ERA_VALUES,
            Self::Usage => USAGE_VALUES,
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FacetKey {
    type Err = FacetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "shape" | "형태" => Ok(Self::Shape),
            "material" | "재질" | "재질_분류" => Ok(Self::Material),
            "era" | "시대" => Ok(Self::Era),
            "usage" | "용도" => Ok(Self::Usage),
            other => Err(FacetError::InvalidFacetKey(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_korean_names() {
        assert_eq!("shape".parse::<FacetKey>(), Ok(FacetKey::Shape));
        assert_eq!("재질_분류".parse::<FacetKey>(), Ok(FacetKey::Material));
        assert_eq!(" 시대 ".parse::<FacetKey>(), Ok(FacetKey::Era));
        assert_eq!("용도".parse::<FacetKey>(), Ok(FacetKey::Usage));
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "colour".parse::<FacetKey>(),
            Err(FacetError::InvalidFacetKey("colour".to_owned()))
        );
    }

    #[test]
    fn index_round_trips_through_all() {
        for (index, key) in FacetKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), index);
            assert_eq!(FacetKey::from_index(index), Some(*key));
        }
        assert_eq!(FacetKey::from_index(FacetKey::COUNT), None);
    }

    #[test]
    fn only_shape_is_multi_valued() {
        let multi = FacetKey::ALL
            .iter()
            .filter(|key| key.is_multi_valued())
            .collect::<Vec<_>>();
        assert_eq!(multi, vec![&FacetKey::Shape]);
    }
}
