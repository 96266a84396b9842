//! Season × soil recommendation tables, one per scale.
//!
//! Every (season, soil) pair has exactly one entry per scale. Crop names refer
//! to `CropProfile::key` in the matching scale's crop table.

use super::types::{Recommendation, Season, SoilType};

pub(crate) static LARGE_TABLE: &[(Season, SoilType, Recommendation)] = &[
    (
        Season::Kharif,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Rice", "Maize", "Sugarcane"],
            tips: &["Proper drainage", "IPM for pests", "Level fields"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Black,
        Recommendation {
            crops: &["Cotton", "Soybean", "Groundnut"],
            tips: &["Deep ploughing", "Avoid waterlogging", "Mulch application"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Red,
        Recommendation {
            crops: &["Groundnut", "Millets", "Pulses"],
            tips: &["Drip irrigation", "Organic manure", "Gypsum application"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Sandy,
        Recommendation {
            crops: &["Millets", "Groundnut"],
            tips: &["Frequent irrigation", "Mulching essential", "Windbreaks"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Loamy,
        Recommendation {
            crops: &["Rice", "Maize", "Cotton"],
            tips: &["Crop rotation", "Regular weeding", "Soil testing"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Wheat", "Mustard", "Gram"],
            tips: &["Proper irrigation", "Monitor pests", "Timely sowing"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Black,
        Recommendation {
            crops: &["Wheat", "Sorghum", "Gram"],
            tips: &["Moisture conservation", "Mulching", "Rotate crops"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Red,
        Recommendation {
            crops: &["Barley", "Pulses", "Mustard"],
            tips: &["Avoid over-irrigation", "Drought-tolerant", "Bunding"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Sandy,
        Recommendation {
            crops: &["Pulses", "Barley"],
            tips: &["Protect from winds", "Mulching", "Legumes"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Loamy,
        Recommendation {
            crops: &["Wheat", "Mustard", "Oats"],
            tips: &["High-yield varieties", "Critical irrigation", "Disease monitoring"],
        },
    ),
    (
        Season::Summer,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Watermelon", "Muskmelon", "Vegetables"],
            tips: &["Drip irrigation", "Plastic mulch", "Staking"],
        },
    ),
    (
        Season::Summer,
        SoilType::Black,
        Recommendation {
            crops: &["Mango", "Vegetables"],
            tips: &["Mulch trees", "Wind protection", "Clean basins"],
        },
    ),
    (
        Season::Summer,
        SoilType::Red,
        Recommendation {
            crops: &["Millets", "Vegetables"],
            tips: &["Drought-tolerant", "Micro-irrigation", "Compost"],
        },
    ),
    (
        Season::Summer,
        SoilType::Sandy,
        Recommendation {
            crops: &["Cucurbits", "Pulses"],
            tips: &["Light irrigation", "Windbreaks", "Early varieties"],
        },
    ),
    (
        Season::Summer,
        SoilType::Loamy,
        Recommendation {
            crops: &["Muskmelon", "Vegetables", "Fodder"],
            tips: &["Crop rotation", "Pest monitoring", "Drainage"],
        },
    ),
];

pub(crate) static SMALL_TABLE: &[(Season, SoilType, Recommendation)] = &[
    (
        Season::Kharif,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Tomato", "Cucumber", "Okra", "Bottle Gourd"],
            tips: &["Drip irrigation", "Support structures", "Water management"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Black,
        Recommendation {
            crops: &["Chillies", "Brinjal", "Bitter Gourd", "Ridge Gourd"],
            tips: &["Mulching", "Soil moisture", "Pest monitoring"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Red,
        Recommendation {
            crops: &["Ginger", "Turmeric", "Green Beans", "Pumpkin"],
            tips: &["Raised beds", "Organic matter", "Drainage"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Sandy,
        Recommendation {
            crops: &["Watermelon", "Muskmelon", "Papaya", "Peanut"],
            tips: &["Light irrigation", "Sand conditioning", "Windbreaks"],
        },
    ),
    (
        Season::Kharif,
        SoilType::Loamy,
        Recommendation {
            crops: &["Carrot", "Radish", "Beet", "Lettuce"],
            tips: &["Balanced NPK", "Regular weeding", "Crop rotation"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Cabbage", "Cauliflower", "Broccoli", "Kale"],
            tips: &["Cool-season", "Pest control netting", "Regular watering"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Black,
        Recommendation {
            crops: &["Spinach", "Fenugreek", "Coriander", "Parsley"],
            tips: &["Leaf crops", "Frequent harvest", "Compost use"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Red,
        Recommendation {
            crops: &["Peas", "Beans", "Lentil", "Chickpea"],
            tips: &["Nitrogen fixation", "Light irrigation", "Soil enrichment"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Sandy,
        Recommendation {
            crops: &["Garlic", "Onion", "Shallot", "Leek"],
            tips: &["Well-draining", "Compost enriched", "Bulb crops"],
        },
    ),
    (
        Season::Rabi,
        SoilType::Loamy,
        Recommendation {
            crops: &["Potato", "Sweet Potato", "Turnip", "Radish"],
            tips: &["Root crops", "Soil preparation", "Mulching"],
        },
    ),
    (
        Season::Summer,
        SoilType::Alluvial,
        Recommendation {
            crops: &["Basil", "Mint", "Oregano", "Thyme"],
            tips: &["Shade cloth", "Frequent misting", "Container farming"],
        },
    ),
    (
        Season::Summer,
        SoilType::Black,
        Recommendation {
            crops: &["Rosemary", "Sage", "Lavender", "Lemongrass"],
            tips: &["Aromatic herbs", "Dry conditions OK", "Minimal water"],
        },
    ),
    (
        Season::Summer,
        SoilType::Red,
        Recommendation {
            crops: &["Dill", "Fennel", "Cumin", "Fenugreek"],
            tips: &["Spice crops", "Low maintenance", "Heat tolerant"],
        },
    ),
    (
        Season::Summer,
        SoilType::Sandy,
        Recommendation {
            crops: &["Cilantro", "Parsley", "Chives", "Green Onion"],
            tips: &["Quick growing", "Regular water", "Succession planting"],
        },
    ),
    (
        Season::Summer,
        SoilType::Loamy,
        Recommendation {
            crops: &["Stevia", "Aloe Vera", "Moringa", "Drumstick"],
            tips: &["Medicinal crops", "Year-round", "High value"],
        },
    ),
];
