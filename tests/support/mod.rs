//! Shared harness for the integration tests: generates a program via the
//! library, then interprets the emitted statement grammar directly
//! against a set of input values (standing in for the C compiler this
//! environment doesn't have).

use std::f64::consts::PI;

use fftgen::config::Config;

/// Builds a `Config` and runs the generator, returning the emitted text.
pub fn generate(
    n: u32,
    inverse: bool,
    real_in: bool,
    real_out: bool,
    symm_in: bool,
    symm_out: bool,
) -> String {
    let config = Config {
        n,
        inverse,
        real_in,
        real_out,
        symm_in,
        symm_out,
        license: false,
        verbose: 0,
    };
    let mut buf = Vec::new();
    fftgen::run(&config, &mut buf).expect("generation should not fail for a validated config");
    String::from_utf8(buf).expect("emitted text is always valid UTF-8")
}

/// Interpreter state: `xr`/`xi` arrays plus the `tr`/`ti` scratch
/// scalars used by the non-symmetric swap form.
pub struct State {
    pub xr: Vec<f64>,
    pub xi: Vec<f64>,
    tr: f64,
    ti: f64,
}

impl State {
    fn slot(&mut self, name: &str, index: usize) -> &mut f64 {
        match name {
            "xr" => &mut self.xr[index],
            "xi" => &mut self.xi[index],
            _ => unreachable!("unknown array {name}"),
        }
    }

    fn scalar(&mut self, name: &str) -> &mut f64 {
        match name {
            "tr" => &mut self.tr,
            "ti" => &mut self.ti,
            _ => unreachable!("unknown scalar {name}"),
        }
    }

    fn read(&self, name: &str, index: Option<usize>) -> f64 {
        match (name, index) {
            ("xr", Some(i)) => self.xr[i],
            ("xi", Some(i)) => self.xi[i],
            ("tr", None) => self.tr,
            ("ti", None) => self.ti,
            _ => unreachable!("unknown reference {name}{index:?}"),
        }
    }
}

/// Runs the emitted text against the given initial `xr`/`xi` arrays and
/// returns the final arrays.
pub fn run_program(xr_init: Vec<f64>, xi_init: Vec<f64>, program: &str) -> (Vec<f64>, Vec<f64>) {
    let mut state = State {
        xr: xr_init,
        xi: xi_init,
        tr: 0.0,
        ti: 0.0,
    };

    for stmt in program.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        exec(&mut state, stmt);
    }

    (state.xr, state.xi)
}

fn exec(state: &mut State, stmt: &str) {
    let (lhs, op, rhs) = split_assignment(stmt);
    let value = eval(state, rhs.trim());
    let (name, index) = parse_ref(lhs.trim());

    match index {
        Some(i) => {
            let slot = state.slot(name, i);
            if op == "+=" {
                *slot += value;
            } else {
                *slot = value;
            }
        }
        None => {
            let slot = state.scalar(name);
            if op == "+=" {
                *slot += value;
            } else {
                *slot = value;
            }
        }
    }
}

fn split_assignment(stmt: &str) -> (&str, &str, &str) {
    if let Some(pos) = stmt.find("+=") {
        (&stmt[..pos], "+=", &stmt[pos + 2..])
    } else if let Some(pos) = stmt.find('=') {
        (&stmt[..pos], "=", &stmt[pos + 1..])
    } else {
        panic!("not an assignment statement: {stmt}")
    }
}

fn parse_ref(text: &str) -> (&str, Option<usize>) {
    if let Some(open) = text.find('[') {
        let name = &text[..open];
        let close = text.find(']').expect("unterminated index");
        let index: usize = text[open + 1..close].trim().parse().expect("integer index");
        (name, Some(index))
    } else {
        (text, None)
    }
}

// --- expression evaluation -------------------------------------------

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: &'a State,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.bytes.get(self.pos).copied()
    }

    fn expr(&mut self) -> f64 {
        let mut value = self.term();
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term();
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term();
                }
                _ => break,
            }
        }
        value
    }

    fn term(&mut self) -> f64 {
        let mut value = self.factor();
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor();
                }
                _ => break,
            }
        }
        value
    }

    fn factor(&mut self) -> f64 {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                -self.factor()
            }
            Some(b'(') => {
                self.pos += 1;
                let value = self.expr();
                self.skip_ws();
                assert_eq!(self.bytes.get(self.pos), Some(&b')'), "expected )");
                self.pos += 1;
                value
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.reference(),
            other => panic!("unexpected token {:?} at {}", other, self.pos),
        }
    }

    fn number(&mut self) -> f64 {
        self.skip_ws();
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let c = self.bytes[self.pos];
            if c.is_ascii_digit() || c == b'.' || c == b'e' || c == b'E' {
                self.pos += 1;
            } else if (c == b'+' || c == b'-')
                && self.pos > start
                && matches!(self.bytes[self.pos - 1], b'e' | b'E')
            {
                self.pos += 1;
            } else {
                break;
            }
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .unwrap()
            .parse()
            .expect("malformed literal")
    }

    fn reference(&mut self) -> f64 {
        self.skip_ws();
        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        let name = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();
        if self.peek() == Some(b'[') {
            self.pos += 1;
            let idx_start = self.pos;
            while self.bytes[self.pos] != b']' {
                self.pos += 1;
            }
            let index: usize = std::str::from_utf8(&self.bytes[idx_start..self.pos])
                .unwrap()
                .trim()
                .parse()
                .expect("integer index");
            self.pos += 1;
            self.state.read(name, Some(index))
        } else {
            self.state.read(name, None)
        }
    }
}

fn eval(state: &State, expr: &str) -> f64 {
    let mut parser = Parser {
        bytes: expr.as_bytes(),
        pos: 0,
        state,
    };
    let v = parser.expr();
    parser.skip_ws();
    assert_eq!(parser.pos, parser.bytes.len(), "trailing input in {expr}");
    v
}

/// Naive O(n^2) discrete Fourier transform used as the property-test
/// oracle. `inverse` follows this tool's convention: unnormalized, the
/// caller divides by `n`.
pub fn reference_dft(xr: &[f64], xi: &[f64], inverse: bool) -> (Vec<f64>, Vec<f64>) {
    let n = xr.len();
    let sign = if inverse { 1.0 } else { -1.0 };
    let mut out_r = vec![0.0; n];
    let mut out_i = vec![0.0; n];
    for k in 0..n {
        let mut sr = 0.0;
        let mut si = 0.0;
        for j in 0..n {
            let theta = sign * 2.0 * PI * (j * k) as f64 / n as f64;
            let (c, s) = (theta.cos(), theta.sin());
            sr += xr[j] * c - xi[j] * s;
            si += xr[j] * s + xi[j] * c;
        }
        out_r[k] = sr;
        out_i[k] = si;
    }
    (out_r, out_i)
}
