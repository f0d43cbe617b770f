// File: crates/timeline-render-skia/src/path.rs
// Summary: Parsers for the small subset of svg attribute syntax the timeline emits.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Close,
}

/// Parse absolute `M`, `L`, `H`, `V` and `Z` commands into move/line segments.
/// Returns `None` on anything else.
pub fn parse_path(d: &str) -> Option<Vec<PathCmd>> {
    let mut out = Vec::new();
    let mut cur = (0.0f32, 0.0f32);
    let mut chars = d.char_indices().peekable();
    let mut cmd: Option<char> = None;
    let mut nums: Vec<f32> = Vec::new();

    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_alphabetic() && c != 'e' && c != 'E' {
            flush(cmd, &mut nums, &mut out, &mut cur)?;
            cmd = Some(c);
            chars.next();
        } else if c == ',' || c.is_whitespace() {
            chars.next();
        } else {
            let start = i;
            let mut end = i;
            let mut first = true;
            while let Some(&(j, n)) = chars.peek() {
                let sign_ok = first && (n == '-' || n == '+');
                if n.is_ascii_digit() || n == '.' || n == 'e' || n == 'E' || sign_ok {
                    end = j + n.len_utf8();
                    first = false;
                    chars.next();
                } else {
                    break;
                }
            }
            nums.push(d[start..end].parse().ok()?);
        }
    }
    flush(cmd, &mut nums, &mut out, &mut cur)?;
    Some(out)
}

fn flush(cmd: Option<char>, nums: &mut Vec<f32>, out: &mut Vec<PathCmd>, cur: &mut (f32, f32)) -> Option<()> {
    let Some(c) = cmd else { return if nums.is_empty() { Some(()) } else { None } };
    match c {
        'M' | 'L' => {
            if nums.is_empty() || nums.len() % 2 != 0 { return None; }
            for (i, pair) in nums.chunks(2).enumerate() {
                *cur = (pair[0], pair[1]);
                // extra pairs after M are implicit line-tos
                out.push(if c == 'M' && i == 0 { PathCmd::MoveTo(cur.0, cur.1) } else { PathCmd::LineTo(cur.0, cur.1) });
            }
        }
        'H' => {
            if nums.is_empty() { return None; }
            for &x in nums.iter() { cur.0 = x; out.push(PathCmd::LineTo(cur.0, cur.1)); }
        }
        'V' => {
            if nums.is_empty() { return None; }
            for &y in nums.iter() { cur.1 = y; out.push(PathCmd::LineTo(cur.0, cur.1)); }
        }
        'Z' | 'z' => {
            if !nums.is_empty() { return None; }
            out.push(PathCmd::Close);
        }
        _ => return None,
    }
    nums.clear();
    Some(())
}

/// `translate(x,y)` or `translate(x)`; other transforms are not emitted by the renderer.
pub fn parse_translate(s: &str) -> Option<(f32, f32)> {
    let inner = s.trim().strip_prefix("translate(")?.strip_suffix(')')?;
    let mut parts = inner.split([',', ' ']).filter(|p| !p.is_empty());
    let x = parts.next()?.trim().parse().ok()?;
    let y = match parts.next() {
        Some(p) => p.trim().parse().ok()?,
        None => 0.0,
    };
    Some((x, y))
}

/// A length in user units: plain numbers, `px`, or `em` relative to `font_size`.
pub fn parse_length(s: &str, font_size: f32) -> Option<f32> {
    let s = s.trim();
    if let Some(em) = s.strip_suffix("em") {
        return em.parse::<f32>().ok().map(|v| v * font_size);
    }
    s.strip_suffix("px").unwrap_or(s).parse().ok()
}
