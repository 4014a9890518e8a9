use mlimi_core::advisory::AdviceOutcome;
use std::collections::BTreeMap;

pub fn print_advice(outcome: &AdviceOutcome) {
    println!("{}", outcome.text());
}

pub fn print_groups(groups: &BTreeMap<String, Vec<String>>) {
    if groups.is_empty() {
        println!("No crops match the given soil properties.");
        return;
    }

    for (i, (group, crops)) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{group} ({})", crops.len());
        for crop in crops {
            println!("  {crop}");
        }
    }
}
