use crate::config::SPONSOR_PREVIEW;

pub const BRANDS: [&str; 50] = [
    "NebulaSoft", "QuantCore", "PixelForge", "DataDynamo", "CloudScale", "DevSphere",
    "LogicGate", "Synthetix", "Velocify", "CyberNodal", "InfiniTech", "MechMind",
    "AeroSys", "BioLogic", "Cryptex", "DeepMindset", "EchoLabs", "FluxDrive",
    "GeoLink", "HyperGrid", "IonWorks", "JuniperQA", "Kinetix", "LuminaAI",
    "MetaFlow", "NeuroNet", "OptiCode", "PulseWave", "QubitSoft", "RapidScale",
    "Solaris", "TerraByte", "UltraV", "VortexIO", "WarpSpeed", "XenonLab",
    "YottaByte", "ZeroPoint", "AlphaWave", "BetaTest", "GammaRay", "DeltaForce",
    "EpsilonDev", "ZetaCore", "EtaSystems", "ThetaCloud", "IotaLink", "KappaCode",
    "LambdaSoft", "MuNet",
];

pub fn visible_brands(showing_all: bool) -> &'static [&'static str] {
    if showing_all {
        &BRANDS
    } else {
        &BRANDS[..SPONSOR_PREVIEW]
    }
}

pub fn toggle_label(showing_all: bool) -> &'static str {
    if showing_all {
        "Show Less"
    } else {
        "Show More"
    }
}
