use textindex::SuffixArrayConstruction;

fn main() {
    let text = b"barnabasbabblesaboutbananas";

    // first, we create the suffix array
    let suffix_array = SuffixArrayConstruction::for_text(text.as_slice())
        .in_owned_buffer32()
        .run()
        .unwrap();

    // its occurrences lookup already answers pattern queries
    println!("Occurrences of \"ba\": {:?}", suffix_array.occurrences(b"ba"));

    // then we can add the lcp array to the mix
    let suffix_array_and_lcp = suffix_array.lcp_construction().run().unwrap();

    if let Some(repeat) = suffix_array_and_lcp.longest_repeated_substring() {
        println!(
            "Longest repeated substring: {:?} at {} and {}",
            String::from_utf8_lossy(&text[repeat.range()]),
            repeat.start,
            repeat.other_start
        );
    }

    // we can destructure the returned object and drop the rank array and the text
    let (suffix_array, lcp, _, _) = suffix_array_and_lcp.into_parts();

    println!("Suffix array: {suffix_array:?}");
    println!("Longest common prefix array: {lcp:?}");
}
