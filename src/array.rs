use crate::{collate, util, value::Value};

/// Coerces every element to a number and drops the ones that come out `NaN`.
pub fn convert_to_numbers(values: &[Value]) -> Vec<f64> {
    values
        .iter()
        .map(Value::to_number)
        .filter(|n| !n.is_nan())
        .collect()
}

pub fn count_matches<T, F>(items: &[T], pred: F) -> usize
where
    F: Fn(&T) -> bool,
{
    items
        .iter()
        .fold(0, |count, item| if pred(item) { count + 1 } else { count })
}

/// Keeps the items for which `pred(item, index, items)` holds, in order.
pub fn filter<T, F>(items: &[T], pred: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|&(idx, item)| pred(item, idx, items))
        .map(|(_, item)| item.clone())
        .collect()
}

pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T, usize) -> U,
{
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| f(item, idx))
        .collect()
}

/// Prefixes each line with its 1-based number: `"01: a"`, ..., `"10: j"`.
pub fn number_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| format!("{}: {}", util::pad_number(idx + 1), line.as_ref()))
        .collect()
}

pub fn remove_empty_lines_via_filter<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line: &&str| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn remove_empty_lines_via_push<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if !line.is_empty() {
            items.push(line.to_string());
        }
    }
    items
}

pub trait Named {
    fn name(&self) -> &str;
}

/// Sorts in place by name, ignoring case and accents unless names tie.
pub fn sort_objects_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| collate::compare(a.name(), b.name()));
}
