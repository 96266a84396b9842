//! Crop fact sheets, one table per scale.
//!
//! The same crop can appear in both tables with different advice (Watermelon,
//! Muskmelon): small-plot guidance is not a scaled-down copy of field guidance.
//! `key` is the spelling used by the recommendation tables.

use super::types::CropProfile;

// ============================================================================
// LARGE SCALE CROPS
// ============================================================================

pub(crate) static LARGE_CROPS: &[CropProfile] = &[
    CropProfile {
        key: "Rice",
        display_name: "Rice",
        overview: "Staple Kharif crop for large-scale commercial farming",
        climate: "Warm and humid; 20–35°C with standing water",
        soil: "Clayey to loamy water-retaining soils",
        npk_ratio: "NPK 100–120:40–60:40 kg/ha",
        irrigation_steps: &["Maintain 2–5 cm standing water", "Drain before harvest"],
        pest_notes: &["Stem borer, leaf folder", "Use resistant varieties"],
    },
    CropProfile {
        key: "Sugarcane",
        display_name: "Sugarcane",
        overview: "Long-duration cash crop for large commercial farms",
        climate: "Tropical; 20–35°C with sunshine",
        soil: "Deep, fertile loam to clay loam",
        npk_ratio: "NPK 250:115:115 kg/ha",
        irrigation_steps: &["Frequent irrigation during growth", "Critical at tillering and grand growth"],
        pest_notes: &["Borers, white grub", "Use resistant varieties"],
    },
    CropProfile {
        key: "Cotton",
        display_name: "Cotton",
        overview: "Important fiber crop in Kharif season",
        climate: "Warm; 21–30°C with long frost-free period",
        soil: "Deep, well-drained black soils",
        npk_ratio: "NPK 150:75:75 kg/ha",
        irrigation_steps: &["Based on soil moisture", "Drip irrigation beneficial"],
        pest_notes: &["Bollworms, sucking pests", "Bt cultivars recommended"],
    },
    CropProfile {
        key: "Wheat",
        display_name: "Wheat",
        overview: "Cool-season cereal for large-scale production",
        climate: "Cool and dry; 15–25°C",
        soil: "Well-drained loamy to clay loam",
        npk_ratio: "NPK 120:60:40 kg/ha",
        irrigation_steps: &["First at 20-25 days", "Then at tillering, jointing, flowering"],
        pest_notes: &["Rusts and aphids", "Avoid waterlogging"],
    },
    CropProfile {
        key: "Maize",
        display_name: "Maize",
        overview: "Versatile cereal for commercial agriculture",
        climate: "Warm; 21–27°C with moisture",
        soil: "Well-drained fertile loams",
        npk_ratio: "NPK 120:60:40 kg/ha",
        irrigation_steps: &["At knee-high, tasseling, grain-fill", "Avoid waterlogging early"],
        pest_notes: &["Stem borers, fall armyworm", "Monitor and control early"],
    },
    CropProfile {
        key: "Soybean",
        display_name: "Soybean",
        overview: "Kharif oilseed and pulse crop",
        climate: "Warm and humid; 20–30°C",
        soil: "Well-drained black soils",
        npk_ratio: "NPK 20:40:40 kg/ha",
        irrigation_steps: &["Based on rainfall", "Avoid waterlogging"],
        pest_notes: &["Pod borers", "Use IPM"],
    },
    CropProfile {
        key: "Groundnut",
        display_name: "Groundnut",
        overview: "Oilseed crop for Kharif season",
        climate: "Warm; 20–30°C",
        soil: "Light sandy loam soils",
        npk_ratio: "NPK 20:40:40 kg/ha plus gypsum",
        irrigation_steps: &["At flowering and pegging", "Avoid waterlogging"],
        pest_notes: &["Leaf spot, rust", "Use resistant varieties"],
    },
    CropProfile {
        key: "Millets",
        display_name: "Millets",
        overview: "Drought-tolerant cereals",
        climate: "Hot and dry; tolerant to drought",
        soil: "Poor, light, marginal soils",
        npk_ratio: "NPK 40–60:20–30:20 kg/ha",
        irrigation_steps: &["Supplemental at critical stages", "Often rainfed"],
        pest_notes: &["Bird damage", "Use scare devices"],
    },
    CropProfile {
        key: "Pulses",
        display_name: "Pulses",
        overview: "Important for protein and soil fertility",
        climate: "Warm to moderate temperatures",
        soil: "Well-drained soils",
        npk_ratio: "Low nitrogen due to fixation",
        irrigation_steps: &["Light irrigations at flowering", "Often rainfed"],
        pest_notes: &["Pod borers", "Use IPM"],
    },
    CropProfile {
        key: "Mustard",
        display_name: "Mustard",
        overview: "Major Rabi oilseed crop",
        climate: "Cool season; 10–25°C",
        soil: "Well-drained loamy soils",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["2-3 irrigations at key stages", "Avoid standing water"],
        pest_notes: &["Aphids", "Use clean seed"],
    },
    CropProfile {
        key: "Gram",
        display_name: "Gram",
        overview: "Important Rabi pulse crop",
        climate: "Cool and dry; preferred",
        soil: "Well-drained loamy soils",
        npk_ratio: "NPK 20:40:20 kg/ha",
        irrigation_steps: &["1-2 irrigations at critical stages", "Often rainfed"],
        pest_notes: &["Pod borer", "Use traps and sprays"],
    },
    CropProfile {
        key: "Barley",
        display_name: "Barley",
        overview: "Hardy Rabi cereal crop",
        climate: "Cool and dry; tolerates salinity",
        soil: "Light soils, marginal lands",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["Fewer than wheat", "Critical at heading"],
        pest_notes: &["Foliar diseases", "Use seed treatment"],
    },
    CropProfile {
        key: "Sorghum",
        display_name: "Sorghum",
        overview: "Cereal and fodder crop",
        climate: "Drought and heat tolerant",
        soil: "Black and red loam soils",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["Supplemental at critical stages", "Often rainfed"],
        pest_notes: &["Shoot fly, stem borer", "Timely sowing helps"],
    },
    CropProfile {
        key: "Oats",
        display_name: "Oats",
        overview: "Cool season fodder and grain crop",
        climate: "Cool climate similar to wheat",
        soil: "Fertile loams with drainage",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["At early growth and tillering", "Supplemental as needed"],
        pest_notes: &["Leaf diseases", "Monitor for rust"],
    },
    CropProfile {
        key: "Watermelon",
        display_name: "Watermelon",
        overview: "Summer fruit crop",
        climate: "Hot and dry; frost sensitive",
        soil: "Light sandy loam soils",
        npk_ratio: "NPK 80:40:60 kg/ha",
        irrigation_steps: &["Frequent during flowering", "Avoid water stress"],
        pest_notes: &["Fruit fly, wilt diseases", "Monitor closely"],
    },
    CropProfile {
        key: "Muskmelon",
        display_name: "Muskmelon",
        overview: "Summer cucurbit crop",
        climate: "Warm with sunshine",
        soil: "Well-drained sandy loam",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["Light but frequent", "Avoid wetting foliage late"],
        pest_notes: &["Downy mildew, fruit flies", "Monitor regularly"],
    },
    CropProfile {
        key: "Vegetables",
        display_name: "Vegetables",
        overview: "Mixed vegetable crops",
        climate: "Varies by crop type",
        soil: "Fertile loamy soils",
        npk_ratio: "Moderate to high demand",
        irrigation_steps: &["Uniform soil moisture", "Drip systems ideal"],
        pest_notes: &["Sucking insects, borers", "Use crop rotation"],
    },
    CropProfile {
        key: "Mango",
        display_name: "Mango",
        overview: "Perennial fruit tree",
        climate: "Tropical to subtropical",
        soil: "Well-drained deep black soils",
        npk_ratio: "NPK 100:50:50 kg/ha",
        irrigation_steps: &["During flowering and fruit dev", "Reduce dry season to induce flowering"],
        pest_notes: &["Fruit fly, anthracnose", "Use fungicides and insecticides"],
    },
    CropProfile {
        key: "Cucurbits",
        display_name: "Cucurbits",
        overview: "Vine crops include cucumber, gourd",
        climate: "Warm season; needs sunshine",
        soil: "Well-drained sandy loam",
        npk_ratio: "NPK 80:40:40 kg/ha",
        irrigation_steps: &["Frequent during flowering", "Avoid wetting foliage"],
        pest_notes: &["Powdery mildew, fruit flies", "Use netting protection"],
    },
];

// ============================================================================
// SMALL SCALE CROPS
// ============================================================================

pub(crate) static SMALL_CROPS: &[CropProfile] = &[
    CropProfile {
        key: "Tomato",
        display_name: "Tomato",
        overview: "High-value vegetable for small-scale drip systems",
        climate: "Warm; 20–25°C",
        soil: "Fertile loamy soil with good drainage",
        npk_ratio: "NPK 150:100:100 kg/ha",
        irrigation_steps: &["Drip irrigation 2-3 days", "Consistent soil moisture", "Avoid leaf wetting"],
        pest_notes: &["Fruit borer, leaf curl virus", "Adequate ventilation helps"],
    },
    CropProfile {
        key: "Lentil",
        display_name: "Lentil",
        overview: " A highly nutritious, protein-rich, cool-season pulse crop; acts as a, soil-enriching, drought-tolerant, and low-input legume",
        climate: "Cool-season crop (18–30°C)",
        soil: "Well-drained loamy to sandy loam soils with a pH of 5.5 to 7.5",
        npk_ratio: "20:40:20 kg/ha (N:P:K).",
        irrigation_steps: &["Mostly grown rainfed; critical stages are flower initiation and pod filling"],
        pest_notes: &["Aphids, Pod borer, Wilt, Rust"],
    },
    CropProfile {
        key: "Cucumber",
        display_name: "Cucumber",
        overview: "Summer climbing vegetable",
        climate: "Warm; 20–25°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Regular drip irrigation", "Keep soil consistently moist"],
        pest_notes: &["Powdery mildew", "Downy mildew management"],
    },
    CropProfile {
        key: "Okra",
        display_name: "Okra",
        overview: "Heat-loving vegetable",
        climate: "Hot; 25–35°C",
        soil: "Well-drained loamy soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Regular but moderate water", "Drip preferred"],
        pest_notes: &["Shoot and fruit borer", "Use neem spray"],
    },
    CropProfile {
        key: "Bottle Gourd",
        display_name: "Bottle Gourd",
        overview: "Summer climbing vegetable",
        climate: "Warm; 25–35°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Frequent during flowering", "Maintain soil moisture"],
        pest_notes: &["Fruit fly, mildew", "Provide support"],
    },
    CropProfile {
        key: "Chillies",
        display_name: "Chillies",
        overview: "Medium-value crop for small-scale systems",
        climate: "Warm; 20–30°C",
        soil: "Well-drained loam with organic matter",
        npk_ratio: "NPK 120:80:100 kg/ha",
        irrigation_steps: &["Drip irrigation 2-3 times weekly", "Avoid waterlogging"],
        pest_notes: &["Die-back, fruit rot", "Proper drainage essential"],
    },
    CropProfile {
        key: "Brinjal",
        display_name: "Brinjal",
        overview: "Long-season solanaceous crop",
        climate: "Warm; 24–30°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 120:80:100 kg/ha",
        irrigation_steps: &["Regular drip irrigation", "Keep soil moist"],
        pest_notes: &["Fruit and shoot borer", "Use Bt and IPM"],
    },
    CropProfile {
        key: "Bitter Gourd",
        display_name: "Bitter Gourd",
        overview: "Medicinal climbing vegetable",
        climate: "Warm; 25–30°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Moderate regular water", "Drip preferred"],
        pest_notes: &["Fruit fly", "Mildew management"],
    },
    CropProfile {
        key: "Ridge Gourd",
        display_name: "Ridge Gourd",
        overview: "Climbing summer vegetable",
        climate: "Warm; 25–35°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Frequent irrigation", "Support structure needed"],
        pest_notes: &["Powdery mildew", "Fruit fly"],
    },
    CropProfile {
        key: "Ginger",
        display_name: "Ginger",
        overview: "High-value rhizome crop",
        climate: "Warm and humid; 25–30°C",
        soil: "Rich, well-drained soil",
        npk_ratio: "NPK 25:100:100 kg/ha",
        irrigation_steps: &["Regular moisture critical", "Avoid waterlogging"],
        pest_notes: &["Leaf blotch", "Root rot prevention"],
    },
    CropProfile {
        key: "Turmeric",
        display_name: "Turmeric",
        overview: "Medicinal rhizome crop",
        climate: "Warm and humid; 25–30°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 40:80:80 kg/ha",
        irrigation_steps: &["Regular moisture needed", "Good drainage essential"],
        pest_notes: &["Leaf blotch", "Rhizome rot management"],
    },
    CropProfile {
        key: "Green Beans",
        display_name: "Green Beans",
        overview: "Legume vegetable crop",
        climate: "Warm; 20–25°C",
        soil: "Well-drained loamy soil",
        npk_ratio: "NPK 20:60:60 kg/ha",
        irrigation_steps: &["Regular drip irrigation", "Keep soil moist"],
        pest_notes: &["Pod borer", "Use support structures"],
    },
    CropProfile {
        key: "Pumpkin",
        display_name: "Pumpkin",
        overview: "Large-fruited cucurbit",
        climate: "Warm; 25–30°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:80 kg/ha",
        irrigation_steps: &["Regular irrigation", "Provide support"],
        pest_notes: &["Powdery mildew", "Fruit flies"],
    },
    CropProfile {
        key: "Watermelon",
        display_name: "Watermelon",
        overview: "Summer fruit for small plots",
        climate: "Hot and dry; 25–35°C",
        soil: "Light sandy loam",
        npk_ratio: "NPK 80:40:60 kg/ha",
        irrigation_steps: &["Frequent during growth", "Drip preferred"],
        pest_notes: &["Fruit fly, wilt", "Monitor closely"],
    },
    CropProfile {
        key: "Muskmelon",
        display_name: "Muskmelon",
        overview: "Summer fruit on small farms",
        climate: "Warm; 25–30°C",
        soil: "Well-drained sandy loam",
        npk_ratio: "NPK 80:40:60 kg/ha",
        irrigation_steps: &["Regular watering", "Avoid wetting foliage"],
        pest_notes: &["Mildew, fruit flies", "Regular monitoring"],
    },
    CropProfile {
        key: "Papaya",
        display_name: "Papaya",
        overview: "Fast-growing tropical fruit",
        climate: "Warm; 24–28°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 100:60:100 kg/ha",
        irrigation_steps: &["Regular drip irrigation", "Drainage critical"],
        pest_notes: &["Papaya ringspot", "Mites and whiteflies"],
    },
    CropProfile {
        key: "Peanut",
        display_name: "Peanut",
        overview: "Oilseed legume",
        climate: "Warm; 20–30°C",
        soil: "Light sandy loam ideal",
        npk_ratio: "NPK 20:40:40 kg/ha plus gypsum",
        irrigation_steps: &["At critical stages", "Avoid waterlogging"],
        pest_notes: &["Leaf spot", "Rot diseases"],
    },
    CropProfile {
        key: "Carrot",
        display_name: "Carrot",
        overview: "Root vegetable crop",
        climate: "Cool to moderate; 15–20°C",
        soil: "Light, well-drained loam",
        npk_ratio: "NPK 80:60:60 kg/ha",
        irrigation_steps: &["Regular but moderate", "Avoid waterlogging"],
        pest_notes: &["Leaf blight", "Root knot"],
    },
    CropProfile {
        key: "Radish",
        display_name: "Radish",
        overview: "Quick-growing root crop",
        climate: "Cool; 10–20°C",
        soil: "Well-drained loamy soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Light regular watering", "Keep soil moist"],
        pest_notes: &["Leaf hoppers", "Minimal pest issues"],
    },
    CropProfile {
        key: "Beet",
        display_name: "BeetRoot",
        overview: "Nutritious root vegetable",
        climate: "Cool to moderate; 15–20°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 80:60:100 kg/ha",
        irrigation_steps: &["Regular moisture", "Avoid stress"],
        pest_notes: &["Leaf spots", "Root diseases"],
    },
    CropProfile {
        key: "Lettuce",
        display_name: "Lettuce",
        overview: "Cool-season vegetable for home gardens",
        climate: "Cool; 15–20°C",
        soil: "Rich, well-drained loam",
        npk_ratio: "NPK 80:60:80 kg/ha",
        irrigation_steps: &["Regular but not waterlogged", "Drip or sprinkler ideal"],
        pest_notes: &["Aphids, whiteflies", "Use neem spray early"],
    },
    CropProfile {
        key: "Cabbage",
        display_name: "Cabbage",
        overview: "Cool-season leafy vegetable",
        climate: "Cool; 15–20°C",
        soil: "Rich, fertile loam",
        npk_ratio: "NPK 120:80:80 kg/ha",
        irrigation_steps: &["Regular consistent moisture", "Critical for head formation"],
        pest_notes: &["Diamondback moth", "Cabbage looper"],
    },
    CropProfile {
        key: "Cauliflower",
        display_name: "Cauliflower",
        overview: "Cool-season brassica",
        climate: "Cool; 15–20°C",
        soil: "Rich, fertile loam",
        npk_ratio: "NPK 150:100:100 kg/ha",
        irrigation_steps: &["Consistent moisture critical", "Drip preferred"],
        pest_notes: &["Cabbage moth", "Root knot"],
    },
    CropProfile {
        key: "Broccoli",
        display_name: "Broccoli",
        overview: "Nutritious cool-season crop",
        climate: "Cool; 15–20°C",
        soil: "Rich, well-drained loam",
        npk_ratio: "NPK 150:100:100 kg/ha",
        irrigation_steps: &["Regular consistent water", "Drip system ideal"],
        pest_notes: &["Cabbage moth", "Diamondback moth"],
    },
    CropProfile {
        key: "Kale",
        display_name: "Kale",
        overview: "Hardy leafy green",
        climate: "Cool; 10–20°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Regular moisture", "Cold hardy"],
        pest_notes: &["Aphids", "Minimal pest issues"],
    },
    CropProfile {
        key: "Spinach",
        display_name: "Spinach",
        overview: "Nutritious leafy vegetable for cool seasons",
        climate: "Cool; 10–20°C",
        soil: "Rich, well-draining loam",
        npk_ratio: "NPK 100:80:80 kg/ha",
        irrigation_steps: &["Consistent moisture", "Drip system recommended"],
        pest_notes: &["Leaf miners, aphids", "Early harvesting reduces pests"],
    },
    CropProfile {
        key: "Fenugreek",
        display_name: "Fenugreek",
        overview: "Medicinal and culinary herb",
        climate: "Cool season; 15–25°C",
        soil: "Well-drained loam",
        npk_ratio: "NPK 20:40:20 kg/ha",
        irrigation_steps: &["Moderate watering", "Avoid waterlogging"],
        pest_notes: &["Minimal issues", "Disease resistant"],
    },
    CropProfile {
        key: "Coriander",
        display_name: "Coriander",
        overview: "Aromatic spice herb",
        climate: "Cool; 15–25°C",
        soil: "Well-drained loam",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Light regular watering", "Drip preferred"],
        pest_notes: &["Leaf blight", "Minimal pest issues"],
    },
    CropProfile {
        key: "Parsley",
        display_name: "Parsley",
        overview: "Culinary herb crop",
        climate: "Cool to moderate; 10–20°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 80:60:60 kg/ha",
        irrigation_steps: &["Regular watering", "Keep soil moist"],
        pest_notes: &["Minimal pest issues", "Disease resistant"],
    },
    CropProfile {
        key: "Peas",
        display_name: "Peas",
        overview: "Cool-season legume",
        climate: "Cool; 15–20°C",
        soil: "Well-drained loamy soil",
        npk_ratio: "NPK 20:40:40 kg/ha",
        irrigation_steps: &["Light regular water", "Avoid waterlogging"],
        pest_notes: &["Pod borer", "Powdery mildew"],
    },
    CropProfile {
        key: "Garlic",
        display_name: "Garlic",
        overview: "Flavoring bulb crop",
        climate: "Cool; 10–20°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 80:60:60 kg/ha",
        irrigation_steps: &["Regular but moderate", "Good drainage critical"],
        pest_notes: &["Thrips", "Purple blotch"],
    },
    CropProfile {
        key: "Onion",
        display_name: "Onion",
        overview: "Bulb vegetable crop",
        climate: "Cool to moderate; 15–25°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 120:80:80 kg/ha",
        irrigation_steps: &["Regular moderate water", "Critical for bulb formation"],
        pest_notes: &["Thrips", "Pink root"],
    },
    CropProfile {
        key: "Shallot",
        display_name: "Shallot",
        overview: "Small bulb crop",
        climate: "Cool; 15–20°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Light regular water", "Good drainage needed"],
        pest_notes: &["Thrips", "Root rot"],
    },
    CropProfile {
        key: "Leek",
        display_name: "Leek",
        overview: "Mild onion-like vegetable",
        climate: "Cool; 10–20°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Regular consistent water", "Keep soil moist"],
        pest_notes: &["Thrips", "Leaf blight"],
    },
    CropProfile {
        key: "Potato",
        display_name: "Potato",
        overview: "Staple root vegetable",
        climate: "Cool; 15–20°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 150:100:150 kg/ha",
        irrigation_steps: &["Regular consistent moisture", "Critical for tuber formation"],
        pest_notes: &["Late blight", "Early blight"],
    },
    CropProfile {
        key: "Sweet Potato",
        display_name: "Sweet Potato",
        overview: "Nutritious root crop",
        climate: "Warm; 24–29°C",
        soil: "Well-drained sandy loam",
        npk_ratio: "NPK 60:100:100 kg/ha",
        irrigation_steps: &["Regular moderate water", "Avoid waterlogging"],
        pest_notes: &["Whiteflies", "Storage rot"],
    },
    CropProfile {
        key: "Turnip",
        display_name: "Turnip",
        overview: "Cool-season root vegetable",
        climate: "Cool; 10–20°C",
        soil: "Well-drained fertile loam",
        npk_ratio: "NPK 80:60:60 kg/ha",
        irrigation_steps: &["Regular watering", "Keep soil moist"],
        pest_notes: &["Leaf hoppers", "Root knot"],
    },
    CropProfile {
        key: "Basil",
        display_name: "Basil",
        overview: "Aromatic culinary herb",
        climate: "Warm; 20–25°C",
        soil: "Well-drained soil with compost",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Regular light watering", "Container friendly"],
        pest_notes: &["Minimal pest issues", "Good air circulation"],
    },
    CropProfile {
        key: "Mint",
        display_name: "Mint",
        overview: "Aromatic medicinal herb",
        climate: "Moderate; 15–25°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Regular watering", "Likes moisture"],
        pest_notes: &["Minimal pest issues", "Spreads vigorously"],
    },
    CropProfile {
        key: "Oregano",
        display_name: "Oregano",
        overview: "Mediterranean aromatic herb",
        climate: "Warm; 20–25°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Moderate watering", "Drought tolerant"],
        pest_notes: &["Minimal issues", "Pest resistant"],
    },
    CropProfile {
        key: "Thyme",
        display_name: "Thyme",
        overview: "Aromatic culinary herb",
        climate: "Cool to warm; 15–25°C",
        soil: "Well-drained sandy soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Drought tolerant"],
        pest_notes: &["Minimal pest issues", "Hardy plant"],
    },
    CropProfile {
        key: "Rosemary",
        display_name: "Rosemary",
        overview: "Aromatic medicinal herb",
        climate: "Warm; 15–25°C",
        soil: "Well-drained sandy soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Drought tolerant"],
        pest_notes: &["Minimal issues", "Hardy plant"],
    },
    CropProfile {
        key: "Sage",
        display_name: "Sage",
        overview: "Medicinal culinary herb",
        climate: "Cool to warm; 15–25°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light to moderate water", "Drought tolerant"],
        pest_notes: &["Minimal pest issues", "Easy to grow"],
    },
    CropProfile {
        key: "Lavender",
        display_name: "Lavender",
        overview: "Aromatic medicinal herb",
        climate: "Warm; 20–25°C",
        soil: "Well-drained sandy soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Drought tolerant"],
        pest_notes: &["Minimal issues", "Pest resistant"],
    },
    CropProfile {
        key: "Lemongrass",
        display_name: "Lemongrass",
        overview: "Aromatic tropical herb",
        climate: "Warm; 25–30°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Regular watering", "High moisture needs"],
        pest_notes: &["Minimal issues", "Pest resistant"],
    },
    CropProfile {
        key: "Dill",
        display_name: "Dill",
        overview: "Feathery aromatic herb",
        climate: "Cool; 15–20°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Light regular watering", "Avoid waterlogging"],
        pest_notes: &["Minimal pest issues", "Self-sows readily"],
    },
    CropProfile {
        key: "Fennel",
        display_name: "Fennel",
        overview: "Aromatic spice herb",
        climate: "Cool season; 15–20°C",
        soil: "Well-drained loam",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Avoid waterlogging"],
        pest_notes: &["Minimal issues", "Disease resistant"],
    },
    CropProfile {
        key: "Cumin",
        display_name: "Cumin",
        overview: "Important spice crop",
        climate: "Cool to warm; 15–25°C",
        soil: "Well-drained loam",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Drought tolerant"],
        pest_notes: &["Minimal pest issues", "Hardy crop"],
    },
    CropProfile {
        key: "Cilantro",
        display_name: "Cilantro",
        overview: "Quick-growing culinary herb",
        climate: "Cool; 15–20°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Regular light watering", "Succession planting ideal"],
        pest_notes: &["Minimal issues", "Quick harvest"],
    },
    CropProfile {
        key: "Chives",
        display_name: "Chives",
        overview: "Onion-flavored herb",
        climate: "Cool to moderate; 10–20°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 60:40:40 kg/ha",
        irrigation_steps: &["Regular watering", "Keep soil moist"],
        pest_notes: &["Minimal pest issues", "Perennial"],
    },
    CropProfile {
        key: "Green Onion",
        display_name: "Green Onion",
        overview: "Quick-growing onion tops",
        climate: "Cool to moderate; 15–20°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 80:60:60 kg/ha",
        irrigation_steps: &["Regular watering", "Keep moist"],
        pest_notes: &["Minimal issues", "Quick harvest"],
    },
    CropProfile {
        key: "Stevia",
        display_name: "Stevia",
        overview: "Natural sweetener crop",
        climate: "Warm; 20–30°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 60:40:60 kg/ha",
        irrigation_steps: &["Regular moderate water", "Good drainage critical"],
        pest_notes: &["Minimal issues", "High value crop"],
    },
    CropProfile {
        key: "Aloe Vera",
        display_name: "Aloe Vera",
        overview: "Medicinal succulent",
        climate: "Hot and dry; 20–35°C",
        soil: "Well-drained sandy soil",
        npk_ratio: "NPK 40:40:40 kg/ha",
        irrigation_steps: &["Light watering", "Drought tolerant"],
        pest_notes: &["Minimal pest issues", "Low maintenance"],
    },
    CropProfile {
        key: "Moringa",
        display_name: "Moringa",
        overview: "Nutritious medicinal tree",
        climate: "Warm; 25–35°C",
        soil: "Well-drained soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Moderate watering", "Drought tolerant"],
        pest_notes: &["Minimal issues", "High nutritional value"],
    },
    CropProfile {
        key: "Drumstick",
        display_name: "Drumstick",
        overview: "Vegetable pod tree",
        climate: "Warm; 25–35°C",
        soil: "Well-drained fertile soil",
        npk_ratio: "NPK 100:60:60 kg/ha",
        irrigation_steps: &["Regular moderate water", "Support needed"],
        pest_notes: &["Shoot and pod borer", "Monitor closely"],
    },
];
