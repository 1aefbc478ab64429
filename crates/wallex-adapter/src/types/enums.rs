/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    Market,
}

/// Candle width accepted by the UDF history endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1")]
    OneMinute,
    #[serde(rename = "60")]
    OneHour,
    #[serde(rename = "180")]
    ThreeHours,
    #[serde(rename = "360")]
    SixHours,
    #[serde(rename = "720")]
    TwelveHours,
    #[serde(rename = "1D")]
    OneDay,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::OneMinute => "1",
            Resolution::OneHour => "60",
            Resolution::ThreeHours => "180",
            Resolution::SixHours => "360",
            Resolution::TwelveHours => "720",
            Resolution::OneDay => "1D",
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "1" => Ok(Resolution::OneMinute),
            "60" => Ok(Resolution::OneHour),
            "180" => Ok(Resolution::ThreeHours),
            "360" => Ok(Resolution::SixHours),
            "720" => Ok(Resolution::TwelveHours),
            "1D" | "1d" => Ok(Resolution::OneDay),
            other => Err(format!("unsupported resolution: {other}")),
        }
    }
}

impl std::str::FromStr for OrderSide {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(format!("unsupported order side: {other}")),
        }
    }
}
