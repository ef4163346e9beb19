//! # Iteration Lessons
//!
//! The built-in cases, one per iteration idiom.
//!
//! ## inject, step by step
//!
//! `inject` walks the sequence once, first to last, carrying an accumulator.
//! The accumulator starts as the initial value; each element is combined into
//! it and the result becomes the accumulator for the next element. Whatever
//! is left after the last element is returned.
//!
//! ```text
//! [2, 3, 4, 5].inject(3, *)
//!
//!   3 * 2 = 6
//!   6 * 3 = 18
//!   18 * 4 = 72
//!   72 * 5 = 360   -> 360
//! ```

use std::ops::ControlFlow;

use crate::adapters::sources::{ArraySource, LineSource, RangeSource};
use crate::engine::config::RunnerConfig;
use crate::engine::runner::{assert_equal, Lesson, LessonResult};
use crate::ports::OrderedSequence;

/// Every built-in lesson, in run order
pub fn all() -> Vec<Lesson> {
    vec![
        Lesson::new("each_visits_every_element", each_visits_every_element),
        Lesson::new("break_stops_each_early", break_stops_each_early),
        Lesson::new("collect_transforms_elements", collect_transforms_elements),
        Lesson::new("select_keeps_matching_elements", select_keeps_matching_elements),
        Lesson::new("find_returns_first_match", find_returns_first_match),
        Lesson::new("inject_accumulates_left_to_right", inject_accumulates_left_to_right),
        Lesson::new("iteration_works_on_any_collection", iteration_works_on_any_collection),
    ]
}

fn each_visits_every_element(_: &RunnerConfig) -> LessonResult {
    let array = ArraySource::from([1, 2, 3]);
    let mut sum = 0;
    array.each(|item| sum += item);
    assert_equal(6, sum)
}

fn break_stops_each_early(_: &RunnerConfig) -> LessonResult {
    let array = ArraySource::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let mut sum = 0;
    array.each_while(|item| {
        if item > 3 {
            return ControlFlow::Break(());
        }
        sum += item;
        ControlFlow::Continue(())
    });
    assert_equal(6, sum)
}

fn collect_transforms_elements(_: &RunnerConfig) -> LessonResult {
    let array = ArraySource::from([1, 2, 3]);

    assert_equal(vec![11, 12, 13], array.collect(|item| item + 10))?;
    assert_equal(vec![11, 12, 13], array.map(|item| item + 10))
}

fn select_keeps_matching_elements(_: &RunnerConfig) -> LessonResult {
    let array = ArraySource::from([1, 2, 3, 4, 5, 6]);

    assert_equal(vec![2, 4, 6], array.select(|item| item % 2 == 0))?;
    assert_equal(vec![2, 4, 6], array.find_all(|item| item % 2 == 0))
}

fn find_returns_first_match(_: &RunnerConfig) -> LessonResult {
    let array = ArraySource::from(["Jim", "Bill", "Clarence", "Doug", "Eli"]);
    assert_equal(Some("Clarence"), array.find(|item| item.len() > 4))
}

fn inject_accumulates_left_to_right(_: &RunnerConfig) -> LessonResult {
    let sum = ArraySource::from([2, 3, 4]).inject(0, |sum, item| sum + item);
    assert_equal(9, sum)?;

    let product = ArraySource::from([2, 3, 4]).inject(1, |product, item| product * item);
    assert_equal(24, product)?;

    let longer = ArraySource::from([2, 3, 4, 5]).inject(3, |product, item| product * item);
    assert_equal(360, longer)?;

    let empty = ArraySource::<i32>::default().inject(5, |sum, item| sum + item);
    assert_equal(5, empty)?;

    let (result, steps) = ArraySource::from([2, 3, 4]).inject_traced(0, |sum, item| sum + item);
    let walk: Vec<_> = steps.iter().map(|s| (s.before, s.element, s.after)).collect();
    assert_equal(vec![(0, 2, 2), (2, 3, 5), (5, 4, 9)], walk)?;
    assert_equal(sum, result)
}

fn iteration_works_on_any_collection(config: &RunnerConfig) -> LessonResult {
    let range = RangeSource::from(1..=3);
    assert_equal(vec![11, 12, 13], range.map(|item| item + 10))?;

    let lines = LineSource::open(&config.example_file)?;
    let upcased = lines.map(|line| line.trim().to_uppercase());
    assert_equal(vec!["THIS", "IS", "A", "TEST"], upcased)
}
