//! Static effectiveness write-up printed after the suites

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "\u{1F4CA} QUESTION GENERATION:",
        &[
            "  Pros:",
            "  \u{2713} Can generate questions from context automatically",
            "  \u{2713} Useful for creating practice tests",
            "  \u{2713} Saves time in content creation",
            "  Cons:",
            "  \u{2717} May require specific models (some have 404 errors)",
            "  \u{2717} Quality depends on context clarity",
            "  \u{2717} May need fine-tuning for domain-specific questions",
            "  Effectiveness: 6-7/10 (model availability issues)",
        ],
    ),
    (
        "\u{1F4CA} ANSWER EVALUATION:",
        &[
            "  Pros:",
            "  \u{2713} Semantic similarity works well (tested successfully)",
            "  \u{2713} QA models can extract expected answers",
            "  \u{2713} Can provide confidence scores",
            "  \u{2713} Good for objective questions",
            "  Cons:",
            "  \u{2717} Struggles with subjective/open-ended answers",
            "  \u{2717} May miss context-dependent correctness",
            "  \u{2717} Simple string matching can be limiting",
            "  Effectiveness: 7-8/10 (works well for factual QA)",
        ],
    ),
    (
        "\u{1F4A1} RECOMMENDATIONS:",
        &[
            "  1. Use QA models (deepset/roberta-base-squad2) - WORKING \u{2713}",
            "  2. Use sentence transformers for similarity - WORKING \u{2713}",
            "  3. Combine multiple approaches for better accuracy",
            "  4. Add human review for complex answers",
            "  5. Consider fine-tuning models for your specific domain",
        ],
    ),
    (
        "\u{1F3AF} BEST USE CASES:",
        &[
            "  \u{2713} Technical interviews (factual questions)",
            "  \u{2713} MCQ generation and validation",
            "  \u{2713} Short answer evaluation",
            "  \u{2713} Automated grading for objective tests",
            "  \u{26A0} Less effective for:",
            "    - Essay evaluation",
            "    - Creative/subjective answers",
            "    - Complex reasoning tasks",
        ],
    ),
];

pub fn print_effectiveness_summary() {
    println!("\n{}", "=".repeat(60));
    println!("EFFECTIVENESS ANALYSIS");
    println!("{}", "=".repeat(60));

    for (heading, lines) in SECTIONS {
        println!("\n{}", heading);
        for line in *lines {
            println!("{}", line);
        }
    }
}
