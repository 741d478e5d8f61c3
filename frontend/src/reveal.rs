//! Timing for the word-by-word hero headline reveal.
//!
//! Nothing in here touches the DOM: the hero component asks these functions
//! for delays and inline styles, and the visibility hook only flips the
//! one-way trigger.

/// Delay between the trigger and the first word.
pub const BASE_DELAY_SECONDS: f64 = 0.2;
/// Gap between the start times of consecutive words.
pub const WORD_STAGGER_SECONDS: f64 = 1.0;
/// How long a single word takes to fade in.
pub const WORD_DURATION_SECONDS: f64 = 0.9;
/// Extra wait after the headline before the bottom description appears.
pub const DESCRIPTION_GAP_SECONDS: f64 = 0.4;
/// Duration of the subtitle and description fades.
pub const LATE_FADE_SECONDS: f64 = 0.8;
/// Fraction of the hero that has to be on screen before the reveal starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

pub const REVEAL_KEYFRAMES: &str = r#"
    @keyframes wordFadeIn {
        0% { opacity: 0; transform: translateY(0.25em); }
        100% { opacity: 1; transform: translateY(0); }
    }
    @keyframes descriptionLateFade {
        0% { opacity: 0; }
        100% { opacity: 1; }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordSchedule {
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

impl WordSchedule {
    pub fn finish_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// Start and duration for word `index` of a `total`-word headline.
///
/// Starts only depend on the index; `total` is there so callers can't ask for
/// a word past the end without it showing up in debug builds.
pub fn schedule_for(index: usize, total: usize) -> WordSchedule {
    debug_assert!(total == 0 || index < total, "word {} of {}", index, total);
    WordSchedule {
        start_seconds: BASE_DELAY_SECONDS + index as f64 * WORD_STAGGER_SECONDS,
        duration_seconds: WORD_DURATION_SECONDS,
    }
}

/// When the last word is fully visible. Zero words behaves like one.
pub fn last_word_finish_seconds(word_count: usize) -> f64 {
    BASE_DELAY_SECONDS + word_count.saturating_sub(1) as f64 * WORD_STAGGER_SECONDS + WORD_DURATION_SECONDS
}

pub fn description_delay_seconds(word_count: usize) -> f64 {
    last_word_finish_seconds(word_count) + DESCRIPTION_GAP_SECONDS
}

/// Words of a headline, grouped into the lines they are rendered on.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlineSpec {
    lines: Vec<Vec<String>>,
    explicit: bool,
}

impl HeadlineSpec {
    /// Explicit words win when there are any; otherwise the title is split on
    /// line breaks and whitespace.
    pub fn new(title: &str, explicit_words: &[String]) -> Self {
        if explicit_words.is_empty() {
            Self::from_title(title)
        } else {
            Self {
                lines: vec![explicit_words.to_vec()],
                explicit: true,
            }
        }
    }

    pub fn from_title(title: &str) -> Self {
        let lines = title
            .split('\n')
            .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|words| !words.is_empty())
            .collect();
        Self {
            lines,
            explicit: false,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Lines of `(global word index, word)`; indices keep counting across lines.
    pub fn indexed_lines(&self) -> Vec<Vec<(usize, &str)>> {
        let mut next = 0;
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|word| {
                        let indexed = (next, word.as_str());
                        next += 1;
                        indexed
                    })
                    .collect()
            })
            .collect()
    }

    pub fn schedule(&self) -> Vec<WordSchedule> {
        let total = self.word_count();
        (0..total).map(|i| schedule_for(i, total)).collect()
    }

    pub fn last_word_finish_seconds(&self) -> f64 {
        last_word_finish_seconds(self.word_count())
    }

    pub fn description_delay_seconds(&self) -> f64 {
        description_delay_seconds(self.word_count())
    }
}

/// One-way latch behind the reveal. Lives as long as the hero is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    triggered: bool,
}

impl RevealState {
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Feeds one visibility event. Returns true only for the event that
    /// flips the latch; everything after that is ignored.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.triggered || visible_fraction < VISIBILITY_THRESHOLD {
            return false;
        }
        self.triggered = true;
        true
    }
}

fn seconds(value: f64) -> String {
    format!("{:.2}s", value)
}

/// Inline style for one headline word. Hidden and still until triggered.
pub fn word_style(schedule: WordSchedule, triggered: bool, margin_right: &str) -> String {
    if triggered {
        format!(
            "display:inline-block;opacity:0;animation:wordFadeIn {} ease forwards;animation-delay:{};margin-right:{};",
            seconds(schedule.duration_seconds),
            seconds(schedule.start_seconds),
            margin_right
        )
    } else {
        format!(
            "display:inline-block;opacity:0;animation:none;animation-delay:0s;margin-right:{};",
            margin_right
        )
    }
}

/// Inline style for the subtitle and description, which fade in after the headline.
pub fn late_fade_style(delay_seconds: f64, triggered: bool) -> String {
    if triggered {
        format!(
            "opacity:0;animation:descriptionLateFade {} ease forwards;animation-delay:{};",
            seconds(LATE_FADE_SECONDS),
            seconds(delay_seconds)
        )
    } else {
        "opacity:0;animation:none;".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_words_finish_at_3_1_and_describe_at_3_5() {
        assert!(close(last_word_finish_seconds(3), 3.1));
        assert!(close(description_delay_seconds(3), 3.5));
    }

    #[test]
    fn finish_time_formula_holds_for_all_counts() {
        for n in 0..50usize {
            let expected = 0.2 + (n.max(1) - 1) as f64 * 1.0 + 0.9;
            assert!(close(last_word_finish_seconds(n), expected), "n = {}", n);
            assert!(close(description_delay_seconds(n), expected + 0.4), "n = {}", n);
        }
    }

    #[test]
    fn zero_words_behave_like_one() {
        assert!(close(last_word_finish_seconds(0), 1.1));
        assert!(close(last_word_finish_seconds(0), last_word_finish_seconds(1)));
    }

    #[test]
    fn word_starts_are_evenly_staggered() {
        let n = 6;
        for i in 0..n {
            let s = schedule_for(i, n);
            assert!(close(s.start_seconds, 0.2 + i as f64));
            assert!(close(s.duration_seconds, 0.9));
        }
        assert!(close(schedule_for(n - 1, n).finish_seconds(), last_word_finish_seconds(n)));
    }

    #[test]
    fn title_is_split_on_line_breaks_and_whitespace() {
        let headline = HeadlineSpec::new("CAPTURING\nTIMELESS   MOMENTS ", &[]);
        assert!(!headline.is_explicit());
        assert_eq!(headline.word_count(), 3);
        assert_eq!(
            headline.indexed_lines(),
            vec![vec![(0, "CAPTURING")], vec![(1, "TIMELESS"), (2, "MOMENTS")]]
        );
    }

    #[test]
    fn explicit_words_override_the_title() {
        let words = vec!["NEXT".to_string(), "IMAGE".to_string()];
        let headline = HeadlineSpec::new("NEXTIMAGE", &words);
        assert!(headline.is_explicit());
        assert_eq!(headline.word_count(), 2);
        assert_eq!(headline.indexed_lines(), vec![vec![(0, "NEXT"), (1, "IMAGE")]]);
    }

    #[test]
    fn indices_keep_counting_across_lines() {
        let headline = HeadlineSpec::new("ONE TWO\nTHREE FOUR\nFIVE", &[]);
        let starts: Vec<f64> = headline.schedule().iter().map(|s| s.start_seconds).collect();
        assert_eq!(starts.len(), 5);
        for (i, start) in starts.iter().enumerate() {
            assert!(close(*start, 0.2 + i as f64));
        }
    }

    #[test]
    fn empty_title_has_no_words() {
        let headline = HeadlineSpec::new(" \n ", &[]);
        assert_eq!(headline.word_count(), 0);
        assert!(headline.schedule().is_empty());
        assert!(close(headline.last_word_finish_seconds(), 1.1));
    }

    #[test]
    fn reveal_latch_flips_exactly_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.1));
        assert!(!state.triggered());

        let flips = [0.3, 0.9, 0.0, 1.0, 0.5]
            .iter()
            .filter(|fraction| state.observe(**fraction))
            .count();
        assert_eq!(flips, 1);
        assert!(state.triggered());
    }

    #[test]
    fn untriggered_styles_stay_hidden() {
        let style = word_style(schedule_for(2, 3), false, "0.25em");
        assert!(style.contains("opacity:0"));
        assert!(style.contains("animation:none"));
        assert_eq!(late_fade_style(3.5, false), "opacity:0;animation:none;");
    }

    #[test]
    fn triggered_styles_carry_the_schedule() {
        let style = word_style(schedule_for(2, 3), true, "0");
        assert!(style.contains("animation:wordFadeIn 0.90s ease forwards"));
        assert!(style.contains("animation-delay:2.20s"));

        let style = late_fade_style(description_delay_seconds(3), true);
        assert!(style.contains("descriptionLateFade 0.80s"));
        assert!(style.contains("animation-delay:3.50s"));
    }
}
