// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_boxed_exam(questions: usize) -> String {
    let mut content = String::from("AZ-305 Practice Exam\n\n");

    for n in 1..=questions {
        content.push_str(&format!(
            "Question #{n}                                   Topic {}\n\n",
            n % 5 + 1
        ));
        content.push_str(
            "You need to recommend a solution that meets the following requirements: \
             ⇨ To the manager of each team, send a monthly report. \
             ⇨ Minimize administrative effort.\n\
             What should you recommend?\n\n",
        );
        content.push_str(
            "A. An access review\n\
             B. A custom role\n\
             C. A conditional access policy\n\
             D. A management group\n\n",
        );
        if n % 4 != 0 {
            content.push_str("Correct Answer: A\n\nReference:\nhttps://learn.microsoft.com/entra/id-governance\n\n");
        }
        content.push_str("Community vote distribution\nA (90%) C (10%)\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_header_exam(questions: usize) -> String {
    (1..=questions)
        .map(|n| {
            format!(
                "Question {n}: Which option is number {n}?\nA. First\nB. Second\nCorrect Answer: B\n"
            )
        })
        .collect()
}
