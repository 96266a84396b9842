//! Irrigation method descriptions, one table per scale.

use super::types::{IrrigationMethod, IrrigationMethodProfile, ScaleMode};

// ============================================================================
// LARGE SCALE METHODS
// ============================================================================

pub(crate) static LARGE_METHODS: &[IrrigationMethodProfile] = &[
    IrrigationMethodProfile {
        method: IrrigationMethod::Canal,
        display_name: "Canal Irrigation",
        description: "A canal irrigation system is an artificial waterway network that diverts water from rivers, lakes, or reservoirs to agricultural fields, primarily using gravity. It consists of main canals, branch canals, and distributaries, providing a reliable, long-term water supply for consistent crop cultivation. These systems enhance food security, particularly in arid regions with low-level, fertile land",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::TubeWell,
        display_name: "Tube Well Irrigation",
        description: "A tube well irrigation system is a sustainable, high-capacity method that uses a long, perforated pipe (usually PVC or metal) bored deep into an underground aquifer, typically 15 to over 100 meters, to extract groundwater. Powered by electric or diesel pumps, it provides consistent, year-round water for agriculture, often covering larger areas than open wells, though it carries risks of groundwater depletion and high initial costs.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::Dam,
        display_name: "Dam/Reservoir Irrigation",
        description: "Dam/Reservoir irrigation systems involve constructing barriers across rivers to impound water, creating reservoirs that store excess wet-season water for release during dry periods. These systems enable controlled irrigation over vast, often remote agricultural lands, providing a reliable water supply that increases crop yields, enhances drought resistance, and often supports hydroelectric power and flood control.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::RiverLift,
        display_name: "River Lift Irrigation",
        description: "A River Lift Irrigation (RLI) system is a method that lifts water from rivers or lower water sources using pumps and pipelines to irrigate higher elevation fields, bypassing the limitations of gravity-fed canals. It is essential for drought-prone, upland areas and involves pumping water into a delivery chamber for distribution.",
    },
];

// ============================================================================
// SMALL SCALE METHODS
// ============================================================================

pub(crate) static SMALL_METHODS: &[IrrigationMethodProfile] = &[
    IrrigationMethodProfile {
        method: IrrigationMethod::HomeGarden,
        display_name: "Home Garden",
        description: "Home garden irrigation systems—principally drip irrigation and micro-sprinklers—deliver water directly to plant roots, maximizing efficiency and minimizing waste. Using a network of pipes, filters, and emitters connected to a water source (tap/tank), these systems ensure consistent moisture levels, save water, and reduce plant disease by avoiding overhead watering.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::Drip,
        display_name: "Drip Irrigation",
        description: "A drip irrigation system is a highly efficient, pressurized method of delivering water and nutrients directly to a plant’s root zone through a network of valves, pipes, and emitters. By minimizing evaporation and runoff, it reduces water usage by up to 50% compared to traditional methods, promoting optimal plant health.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::LimitedWater,
        display_name: "Limited Water",
        description: "Limited Water Irrigation systems, often referred to as Micro-irrigation, Deficit Irrigation (DI), or precision irrigation, are advanced agricultural techniques designed to maximize water efficiency and crop yield when water resources are scarce. Instead of flooding entire fields, these systems deliver water directly to the plant's root zone, significantly reducing evaporation and runoff.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::Sprinkler,
        display_name: "Sprinkler System",
        description: "A sprinkler system is a, pressurized irrigation method that simulates natural rainfall, using pipes, pumps, and nozzles to spray water over crops. It is designed for high water-use efficiency across varied terrains and soil types, reducing evaporation and labor compared to surface methods while allowing for uniform, controlled water application and fertilizer delivery.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::WellsAndBore,
        display_name: "Wells & Bore",
        description: "Wells and boreholes (or borewells) are critical groundwater-based irrigation systems used to extract water from underground aquifers, supporting agriculture especially when surface water is scarce. They provide a reliable, independent, and often cost-effective water source, allowing farmers to irrigate in dry seasons and reduce reliance on rain.",
    },
    IrrigationMethodProfile {
        method: IrrigationMethod::RainwaterHarvesting,
        display_name: "Rainwater Harvesting",
        description: "Rainwater harvesting in irrigation involves collecting, storing, and utilizing rainwater runoff—primarily from rooftops, land surfaces, or agricultural fields—to provide a sustainable water source for crops, reducing reliance on groundwater. It is a vital technique for increasing agricultural productivity in arid regions by mitigating water scarcity, soil erosion, and flooding.",
    },
];

/// Method table for a scale, in presentation order
pub fn methods_for(scale: ScaleMode) -> &'static [IrrigationMethodProfile] {
    match scale {
        ScaleMode::Large => LARGE_METHODS,
        ScaleMode::Small => SMALL_METHODS,
    }
}

/// Profile for a single method. Total over the enum; the tables are laid out
/// in `IrrigationMethod::for_scale` order.
pub fn method_profile(method: IrrigationMethod) -> &'static IrrigationMethodProfile {
    let index = match method {
        IrrigationMethod::Canal | IrrigationMethod::HomeGarden => 0,
        IrrigationMethod::TubeWell | IrrigationMethod::Drip => 1,
        IrrigationMethod::Dam | IrrigationMethod::LimitedWater => 2,
        IrrigationMethod::RiverLift | IrrigationMethod::Sprinkler => 3,
        IrrigationMethod::WellsAndBore => 4,
        IrrigationMethod::RainwaterHarvesting => 5,
    };
    &methods_for(method.scale())[index]
}
