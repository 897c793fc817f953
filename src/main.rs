use std::sync::LazyLock;

use adducts::{AdductDetector, AdductTable, IonizationMode, Peak};
use lipids::{Annotation, Lipid, LipidType};
use log::info;

static ADDUCT_TABLE: LazyLock<AdductTable> = LazyLock::new(AdductTable::default);

fn main() {
    env_logger::init();

    let detector = AdductDetector::new(&ADDUCT_TABLE);
    let positive = IonizationMode::Positive;

    // [M+H]+ of these triacylglycerols: 885.79057, 857.75927, and 913.82187
    let tg_54_3 = Lipid::new(1, "TG 54:3", "C57H104O6", LipidType::TG, 54, 3);
    let tg_52_3 = Lipid::new(2, "TG 52:3", "C55H100O6", LipidType::TG, 52, 3);
    let tg_56_3 = Lipid::new(3, "TG 56:3", "C59H108O6", LipidType::TG, 56, 3);
    let pc_34_1 = Lipid::new(4, "PC 34:1", "C42H82NO8P", LipidType::PC, 34, 1);
    let pe_36_2 = Lipid::new(5, "PE 36:2", "C41H78NO8P", LipidType::PE, 36, 2);

    let annotations = [
        Annotation::new(tg_54_3, 885.790_56, 10e6, 10.0, positive, detector),
        Annotation::new(tg_52_3, 857.759_3, 10e7, 9.0, positive, detector),
        Annotation::new(tg_56_3, 913.822, 10e5, 11.0, positive, detector),
        Annotation::with_signals(
            pc_34_1,
            700.499_99,
            8e4,
            6.5,
            positive,
            detector,
            [Peak::new(700.5, 1e5), Peak::new(722.482, 8e4)],
        ),
        Annotation::with_signals(
            pe_36_2,
            700.5,
            9e4,
            7.5,
            positive,
            detector,
            [Peak::new(700.5, 9e4), Peak::new(682.489_4, 7e4)],
        ),
    ];

    info!("annotating {} candidate lipids", annotations.len());
    for annotation in &annotations {
        println!("{annotation}");
    }
}
