//! Integration tests for the keyword density engine

use seokit::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use seokit::density::{PhraseCounting, RelatedKeywordMode};
use seokit::prelude::*;

const SEO_TOOLS: &str = "SEO tools help you rank. SEO tools are free SEO tools for everyone.";

fn repeat(word: &str, times: usize) -> Vec<String> {
    std::iter::repeat_n(word.to_string(), times).collect()
}

fn distinct_terms(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("term{i:02}")).collect()
}

#[test]
fn test_seo_tools_example() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze(SEO_TOOLS, "seo tools")?;

    // "seo tools help you rank seo tools are free seo tools for everyone"
    assert_eq!(result.total_words, 13);
    // 3 exact matches, plus floor(3 / 2) for "seo" and floor(3 / 2) for "tools"
    assert_eq!(result.keyword_count, 3 + 1 + 1);
    assert_eq!(result.density, 38.46);

    let exact = DensityAnalyzer::new(
        DensityConfig::default().with_phrase_counting(PhraseCounting::ExactOnly),
    )?;
    let result = exact.analyze(SEO_TOOLS, "seo tools")?;
    assert_eq!(result.keyword_count, 3);
    assert_eq!(result.density, 23.08);

    Ok(())
}

#[test]
fn test_accented_words_count_once() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze("naïve café résumé", "café")?;

    assert_eq!(result.total_words, 3);
    assert_eq!(result.keyword_count, 1);
    assert_eq!(result.density, 33.33);
    let keywords: Vec<&str> = result
        .related_keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["naïve", "café", "résumé"]);

    Ok(())
}

#[test]
fn test_empty_document() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze("", "anything")?;

    assert_eq!(result.density, 0.0);
    assert_eq!(result.total_words, 0);
    assert_eq!(result.keyword_count, 0);
    assert!(result.related_keywords.is_empty());
    assert_eq!(result.score_breakdown.density, 0);
    assert_eq!(result.score_breakdown.frequency, 0);
    assert_eq!(result.score_breakdown.length, 0);
    assert_eq!(result.score_breakdown.diversity, 0);
    assert_eq!(result.seo_score, 0);

    Ok(())
}

#[test]
fn test_filler_document_in_optimal_range() -> Result<()> {
    let mut words = repeat("filler", 495);
    for position in [0, 100, 200, 300, 400] {
        words.insert(position, "optimization".to_string());
    }
    let text = words.join(" ");

    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze(&text, "optimization")?;

    assert_eq!(result.total_words, 500);
    assert_eq!(result.keyword_count, 5);
    assert_eq!(result.density, 1.0);
    assert_eq!(result.score_breakdown.density, 30);
    assert_eq!(result.score_breakdown.frequency, 20);
    assert_eq!(result.score_breakdown.length, 20);
    // only "filler" and "optimization" qualify as related keywords
    assert_eq!(result.related_keywords.len(), 2);
    assert_eq!(result.score_breakdown.diversity, 0);
    assert_eq!(result.seo_score, 70);

    assert_eq!(result.related_keywords[0].keyword, "filler");
    assert_eq!(result.related_keywords[0].count, 495);
    assert_eq!(result.related_keywords[0].density, 99.0);

    Ok(())
}

#[test]
fn test_keyword_stuffing() -> Result<()> {
    let text = repeat("filler", 500).join(" ");
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze(&text, "filler")?;

    assert_eq!(result.density, 100.0);
    assert_eq!(result.score_breakdown.density, 0);
    assert_eq!(result.score_breakdown.frequency, 5);
    assert_eq!(result.score_breakdown.length, 20);
    assert_eq!(result.seo_score, 25);
    assert!(result.suggestions[0].starts_with("Keyword density is too high (100.00%)"));
    assert!(
        result
            .improvements
            .contains(&"Reduce keyword density to avoid over-optimization.".to_string())
    );

    Ok(())
}

#[test]
fn test_length_band_thresholds() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    for (words, points) in [(49, 0), (50, 5), (149, 5), (150, 10), (300, 15), (500, 20)] {
        let text = repeat("word", words).join(" ");
        let result = analyzer.analyze(&text, "absent")?;
        assert_eq!(result.total_words, words);
        assert_eq!(result.score_breakdown.length, points, "{words} words");
    }
    Ok(())
}

#[test]
fn test_frequency_band_thresholds() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    for (occurrences, points) in [(0, 0), (1, 15), (3, 20), (10, 20), (11, 15), (15, 15), (16, 5)] {
        let mut words = repeat("target", occurrences);
        words.extend(repeat("padding", 1000));
        let result = analyzer.analyze(&words.join(" "), "target")?;
        assert_eq!(result.keyword_count, occurrences);
        assert_eq!(result.score_breakdown.frequency, points, "{occurrences} occurrences");
    }
    Ok(())
}

#[test]
fn test_density_band_thresholds() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    // (occurrences out of 1000 words, points)
    for (occurrences, points) in [(3, 20), (5, 30), (25, 30), (30, 20), (34, 20), (40, 10), (50, 10), (51, 0)]
    {
        let mut words = repeat("target", occurrences);
        words.extend(repeat("padding", 1000 - occurrences));
        let result = analyzer.analyze(&words.join(" "), "target")?;
        assert_eq!(result.total_words, 1000);
        assert_eq!(result.score_breakdown.density, points, "{occurrences} per 1000");
    }
    Ok(())
}

#[test]
fn test_diversity_band_thresholds() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    for (terms, points) in [(2, 0), (3, 10), (5, 15), (10, 20), (15, 30), (40, 30)] {
        let text = distinct_terms(terms).join(" ");
        let result = analyzer.analyze(&text, "absent")?;
        assert_eq!(result.related_keywords.len(), terms.min(15));
        assert_eq!(result.score_breakdown.diversity, points, "{terms} terms");
    }
    Ok(())
}

#[test]
fn test_related_keyword_limits() -> Result<()> {
    let text = distinct_terms(40).join(" ");

    let extended = DensityAnalyzer::with_defaults()?;
    assert_eq!(extended.analyze(&text, "term00")?.related_keywords.len(), 15);

    let basic =
        DensityAnalyzer::new(DensityConfig::default().with_mode(RelatedKeywordMode::Basic))?;
    let result = basic.analyze(&text, "term00")?;
    assert_eq!(result.related_keywords.len(), 10);
    assert!(result.related_keywords.iter().all(|k| k.keyword != "term00"));
    assert_eq!(result.score_breakdown.diversity, 20);

    let request = DensityRequest::new(text, "term00").with_related_keyword_limit(3);
    assert_eq!(basic.analyze_request(&request)?.related_keywords.len(), 3);

    Ok(())
}

#[test]
fn test_related_keywords_sorted_with_stable_ties() -> Result<()> {
    let text = "zeta alpha zeta beta gamma beta zeta delta alpha";
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze(text, "absent")?;

    let ranked: Vec<(&str, usize)> = result
        .related_keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.count))
        .collect();
    assert_eq!(
        ranked,
        vec![("zeta", 3), ("alpha", 2), ("beta", 2), ("gamma", 1), ("delta", 1)]
    );
    assert!(
        result
            .related_keywords
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count)
    );

    Ok(())
}

#[test]
fn test_stop_words_and_short_words_never_related() -> Result<()> {
    let text = "Would there be anything about their content? Yes, content with SEO and more content.";
    let analyzer = DensityAnalyzer::with_defaults()?;
    let result = analyzer.analyze(text, "content")?;

    for keyword in &result.related_keywords {
        assert!(keyword.keyword.chars().count() > 3, "{}", keyword.keyword);
        assert!(!DEFAULT_ENGLISH_STOP_WORDS.contains(&keyword.keyword.as_str()));
    }
    let keywords: Vec<&str> = result
        .related_keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["content", "anything", "more"]);

    Ok(())
}

#[test]
fn test_smaller_stop_word_list() -> Result<()> {
    let analyzer = DensityAnalyzer::new(DensityConfig::default().with_stop_words(vec!["about"]))?;
    let result = analyzer.analyze("about their would about", "x")?;

    let keywords: Vec<&str> = result
        .related_keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["their", "would"]);

    Ok(())
}

#[test]
fn test_score_is_sum_of_bands() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let documents = [
        SEO_TOOLS.to_string(),
        distinct_terms(30).join(" "),
        repeat("seo", 600).join(" "),
        "Keyword density matters. Keyword research, keyword tools and content.".to_string(),
    ];

    for document in &documents {
        let result = analyzer.analyze(document, "seo")?;
        let breakdown = &result.score_breakdown;
        let sum = breakdown.density as u32
            + breakdown.frequency as u32
            + breakdown.length as u32
            + breakdown.diversity as u32;
        assert!(result.seo_score <= 100);
        assert_eq!(result.seo_score as u32, sum.min(100));
    }

    Ok(())
}

#[test]
fn test_analysis_is_deterministic() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let first = serde_json::to_string(&analyzer.analyze(SEO_TOOLS, "seo tools")?)?;
    let second = serde_json::to_string(&analyzer.analyze(SEO_TOOLS, "seo tools")?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_analyzer_shared_across_threads() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let expected = analyzer.analyze(SEO_TOOLS, "seo tools")?;

    let results: Vec<AnalysisResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyzer.analyze(SEO_TOOLS, "seo tools")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(results.iter().all(|result| *result == expected));
    Ok(())
}

#[test]
fn test_result_json_shape() -> Result<()> {
    let analyzer = DensityAnalyzer::with_defaults()?;
    let value = serde_json::to_value(analyzer.analyze(SEO_TOOLS, "seo tools")?)?;

    for key in [
        "density",
        "totalWords",
        "keywordCount",
        "relatedKeywords",
        "seoScore",
        "scoreBreakdown",
        "suggestions",
        "improvements",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    Ok(())
}
