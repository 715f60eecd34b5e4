//! Re-indentation by running parenthesis depth.

use hdlif_common::IndentUnit;

/// Removes leading whitespace from every line.
pub fn left_justify(lines: &mut [String]) {
    for line in lines.iter_mut() {
        let trimmed = line.trim_start();
        if trimmed.len() != line.len() {
            *line = trimmed.to_string();
        }
    }
}

/// Re-indents `lines` by parenthesis depth, starting at `initial_depth`.
///
/// Each line is indented at the lowest depth reached while scanning it, so a
/// line that opens with `)` sits one level out from its contents. The depth
/// at the end of a line carries into the next one. Empty lines stay empty.
pub fn indent(lines: &mut [String], initial_depth: usize, unit: IndentUnit) {
    left_justify(lines);
    let mut depth = initial_depth as isize;
    for line in lines.iter_mut() {
        let mut lowest = depth;
        for c in line.chars() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    lowest = lowest.min(depth);
                }
                _ => {}
            }
        }
        if !line.is_empty() {
            let prefix = unit.render(lowest.max(0) as usize);
            line.insert_str(0, &prefix);
        }
    }
}
