//! Interactive driver: builds the dataset and key function from prompts, then
//! delegates to the analysis harness and prints the comparison report.

use std::fmt::Debug;
use std::io::{self, Write};

use sortmeter::input::{self, InputError, Person, PersonKey};
use sortmeter::prelude::*;

fn main() {
    if let Err(err) = run() {
        println!("{err}");
    }
}

fn run() -> Result<(), InputError> {
    println!("====== SORTING BENCHMARK SYSTEM ======\n");

    println!("Select Data Type:");
    println!("1 - Numbers");
    println!("2 - Strings");
    println!("3 - People");

    let choice = prompt("Enter choice: ")?;
    match choice.as_str() {
        "1" => {
            let line = prompt("Enter numbers separated by commas: ")?;
            let data = input::parse_numbers(&line)?;
            let order = prompt_order()?;
            run_comparison(&data, &|x: &f64| *x, order);
        }
        "2" => {
            let line = prompt("Enter words separated by commas: ")?;
            let data = input::parse_words(&line);
            let order = prompt_order()?;
            run_comparison(&data, &|s: &String| s.to_lowercase(), order);
        }
        "3" => {
            let people = prompt_people()?;
            let strategy = prompt_person_key()?;
            let order = prompt_order()?;
            match strategy {
                PersonKey::Age => run_comparison(&people, &|p: &Person| p.age, order),
                PersonKey::Name => run_comparison(&people, &|p: &Person| p.name_key(), order),
                PersonKey::Grade => run_comparison(&people, &|p: &Person| p.grade, order),
                PersonKey::AgeThenName => {
                    run_comparison(&people, &|p: &Person| (p.age, p.name_key()), order)
                }
                PersonKey::GradeThenAge => {
                    run_comparison(&people, &|p: &Person| (p.grade, p.age), order)
                }
            }
        }
        other => return Err(InputError::InvalidChoice(other.to_string())),
    }

    Ok(())
}

/// Runs both algorithms over the same dataset and prints the full report.
fn run_comparison<T, K, F>(data: &[T], key: &F, order: SortOrder)
where
    T: Clone + Debug + DeepSize,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    println!("\nRunning Quick Sort and Merge Sort...\n");

    let quick = analyze(&QuickSort, data, key, order);
    let merge = analyze(&MergeSort, data, key, order);

    println!("====== SORTED OUTPUT ======");
    println!("Sorted Data: {:?}", quick.sorted);

    println!("\n====== PERFORMANCE REPORT ======");
    print_report(QuickSort.name(), &quick);
    print_report(MergeSort.name(), &merge);

    println!("\n====== DECISION INSIGHT ======");
    if quick.elapsed < merge.elapsed {
        println!("{} was faster for this dataset.", QuickSort.name());
    } else {
        println!("{} was faster for this dataset.", MergeSort.name());
    }
}

fn print_report<T>(name: &str, report: &AnalysisReport<T>) {
    println!("\n{name}:");
    println!("Time: {:.6} seconds", report.elapsed_secs());
    println!("Comparisons: {}", report.comparisons);
    println!("Memory Used: {} bytes", report.memory_bytes);
}

fn prompt_people() -> Result<Vec<Person>, InputError> {
    let count = input::parse_integer(&prompt("How many people? ")?)?;

    let mut people = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name = prompt("Enter name: ")?;
        let age = input::parse_integer(&prompt("Enter age: ")?)?;
        let grade = input::parse_number(&prompt("Enter grade: ")?)?;
        people.push(Person::new(name, age, grade));
    }

    Ok(people)
}

fn prompt_person_key() -> Result<PersonKey, InputError> {
    println!("\nSort By:");
    println!("1 - Age");
    println!("2 - Name");
    println!("3 - Grade");
    println!("4 - Age then Name");
    println!("5 - Grade then Age");

    PersonKey::from_choice(&prompt("Choose sorting strategy: ")?)
}

fn prompt_order() -> Result<SortOrder, InputError> {
    println!("\nSort Direction:");
    println!("1 - Ascending");
    println!("2 - Descending");

    Ok(input::parse_order(&prompt("Choose direction: ")?))
}

/// Prints a prompt without a trailing newline and reads one trimmed line.
fn prompt(label: &str) -> Result<String, InputError> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
