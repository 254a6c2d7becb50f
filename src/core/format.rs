//! 位置参数格式化
//!
//! printf 风格的模板替换：`%s`、`%d`、`%v` 等动词依次消费参数，
//! 参数以 `Display` 渲染。支持 `-`、`+`、`0` 标志以及宽度和精度。
//!
//! 参数不足、参数多余或缺少动词时，不会报错，而是把诊断信息写进输出：
//!
//! - `%!d(MISSING)`：动词没有对应的参数
//! - `%!(EXTRA a, b)`：参数多于动词
//! - `%!(NOVERB)`：模板以单独的 `%` 结尾
//! - `%!(BADWIDTH)` / `%!(BADPREC)`：宽度或精度超过 [`MAX_WIDTH`]，该项被忽略

use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// 宽度和精度的上限，超过时按无效处理而不是尝试分配
pub const MAX_WIDTH: usize = 1_000_000;

/// 格式说明中的标志、宽度和精度
#[derive(Debug, Default)]
struct Spec {
    left_align: bool,
    plus: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
}

/// 按 printf 规则把 `args` 代入 `pattern`
pub fn sprintf(pattern: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(pattern.len() + args.len() * 8);
    let mut chars = pattern.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let spec = parse_spec(&mut chars);

        let verb = match chars.next() {
            Some(v) => v,
            None => {
                out.push_str("%!(NOVERB)");
                break;
            }
        };

        if !verb.is_ascii_alphabetic() {
            let _ = write!(out, "%!{}(NOVERB)", verb);
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                if spec.bad_width {
                    out.push_str("%!(BADWIDTH)");
                }
                if spec.bad_precision {
                    out.push_str("%!(BADPREC)");
                }
                out.push_str(&render(*arg, verb, &spec));
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..].iter().map(|a| a.to_string()).collect();
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Spec {
    let mut spec = Spec::default();

    while let Some(&c) = chars.peek() {
        match c {
            '-' => spec.left_align = true,
            '+' => spec.plus = true,
            '0' => spec.zero_pad = true,
            _ => break,
        }
        chars.next();
    }

    match parse_number(chars) {
        Some(width) if width > MAX_WIDTH => spec.bad_width = true,
        width => spec.width = width,
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        match parse_number(chars).unwrap_or(0) {
            precision if precision > MAX_WIDTH => spec.bad_precision = true,
            precision => spec.precision = Some(precision),
        }
    }

    spec
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}

fn render(arg: &dyn Display, verb: char, spec: &Spec) -> String {
    let mut text = match spec.precision {
        Some(precision) => format!("{:.*}", precision, arg),
        None => arg.to_string(),
    };

    if verb == 'q' {
        text = format!("{:?}", text);
    }

    if spec.plus && is_numeric(&text) && !text.starts_with('-') {
        text.insert(0, '+');
    }

    let width = match spec.width {
        Some(width) => width,
        None => return text,
    };
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = width - len;

    if spec.left_align {
        text.extend(std::iter::repeat(' ').take(fill));
        text
    } else if spec.zero_pad && is_numeric(&text) {
        // 零填充插在符号之后
        let sign_len = if text.starts_with(['+', '-']) { 1 } else { 0 };
        let zeros: String = std::iter::repeat('0').take(fill).collect();
        text.insert_str(sign_len, &zeros);
        text
    } else {
        let mut padded: String = std::iter::repeat(' ').take(fill).collect();
        padded.push_str(&text);
        padded
    }
}

// 可选符号 + 数字 + 可选小数部分，不认 inf / NaN
fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit())
}
