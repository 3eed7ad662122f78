//! Console output.

use crate::classifier::{AttributeModel, ClassifierModel};
use crate::error::Result;
use crate::evaluate::Evaluation;

/// Prints the evaluation summary. Fails when no records were compared.
pub fn print_results(evaluation: &Evaluation) -> Result<()> {
    let accuracy = evaluation.accuracy()?;
    println!("\nOUTCOME\n");
    println!("Records compared:    {}", evaluation.total);
    println!("Correct predictions: {}", evaluation.correct);
    if evaluation.rejected > 0 {
        println!("Records rejected:    {}", evaluation.rejected);
    }
    println!("✅ Accuracy: {:.2}%", accuracy * 100.0);
    Ok(())
}

/// Lists what was learned for each attribute.
pub fn print_model(model: &ClassifierModel) {
    println!("Learned midpoints:");
    for (attribute, learned) in model.iter() {
        match learned {
            AttributeModel::Threshold(threshold) => {
                println!("{:>15} | threshold: {:.3}", attribute.name(), threshold);
            }
            AttributeModel::Scores(scores) => {
                println!("{:>15} |", attribute.name());
                let labels = attribute.vocabulary().map_or(&[][..], |v| v.labels());
                for (label, score) in labels.iter().zip(scores) {
                    println!("{:>25} | score: {:.3}", label, score);
                }
            }
            AttributeModel::Uninformative => {
                println!("{:>15} | no known values in one group", attribute.name());
            }
        }
    }
}
