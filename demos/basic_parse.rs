//! Basic dataset parsing example

use vtl_dataset::{InputRegistry, Role};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "
region[I,String],year[I,String],population[M,Number],status[A,String]
0101,2015,30000,P
0101,2016,30500,F
0301,2015,647676,P
";

    let mut inputs = InputRegistry::new();
    inputs.load("population", text)?;

    for dataset in &inputs {
        println!("Dataset: {}", dataset.name());
        for column in dataset.structure() {
            println!("  {:<12} {:<10} {}", column.name(), column.role(), column.type_tag());
        }

        let measures: Vec<_> = dataset.columns_with_role(Role::Measure).collect();
        println!("  {} measure column(s), {} rows", measures.len(), dataset.row_count());

        for row in dataset.data() {
            println!("  {}", row.join(" | "));
        }
    }

    match inputs.load("broken", "region[I,String],value[M,Number]\n0101") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nError: {}", e),
    }

    Ok(())
}
