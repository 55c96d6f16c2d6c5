//! A tiny VT100 interpreter for checking what the renderer's escape
//! sequences do to a screen, rather than which bytes they are.
//!
//! Understands exactly the subset chklist emits: printable ASCII, CR, LF,
//! DECSC/DECRC (`ESC 7` / `ESC 8`) and the CSI finals `A B G H J` plus the
//! `?1049` alternate-screen toggle.

#![allow(dead_code)]

pub const WIDTH: usize = 80;

pub struct Screen {
    height: usize,
    grid: Vec<Vec<char>>,
    row: usize,
    col: usize,
    saved: Option<(usize, usize)>,
    primary: Option<(Vec<Vec<char>>, usize, usize)>,
    pub scrolled: usize,
}

impl Screen {
    pub fn new(height: usize) -> Self {
        Self {
            height,
            grid: vec![vec![' '; WIDTH]; height],
            row: 0,
            col: 0,
            saved: None,
            primary: None,
            scrolled: 0,
        }
    }

    /// A screen whose cursor sits at the start of `row`, as after a prompt.
    pub fn with_cursor_at(height: usize, row: usize) -> Self {
        let mut screen = Self::new(height);
        screen.row = row;
        screen
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn in_alternate(&self) -> bool {
        self.primary.is_some()
    }

    pub fn line(&self, row: usize) -> String {
        self.grid[row].iter().collect::<String>().trim_end().to_string()
    }

    pub fn put_line(&mut self, row: usize, text: &str) {
        for (col, ch) in text.chars().enumerate() {
            self.grid[row][col] = ch;
        }
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                0x1b => {
                    i += 1;
                    match bytes.get(i) {
                        Some(b'7') => self.saved = Some((self.row, self.col)),
                        Some(b'8') => {
                            if let Some((r, c)) = self.saved {
                                self.row = r;
                                self.col = c;
                            }
                        }
                        Some(b'[') => {
                            let start = i + 1;
                            let mut end = start;
                            while !(0x40..=0x7e).contains(&bytes[end]) {
                                end += 1;
                            }
                            let params = std::str::from_utf8(&bytes[start..end]).unwrap();
                            self.csi(params, bytes[end]);
                            i = end;
                        }
                        other => panic!("unsupported escape {:?}", other),
                    }
                }
                b'\r' => self.col = 0,
                b'\n' => self.line_feed(),
                b => {
                    assert!(b.is_ascii_graphic() || b == b' ', "unexpected byte {:#x}", b);
                    if self.col < WIDTH {
                        self.grid[self.row][self.col] = b as char;
                    }
                    self.col = (self.col + 1).min(WIDTH - 1);
                }
            }
            i += 1;
        }
    }

    fn line_feed(&mut self) {
        if self.row + 1 == self.height {
            self.grid.remove(0);
            self.grid.push(vec![' '; WIDTH]);
            self.scrolled += 1;
        } else {
            self.row += 1;
        }
    }

    fn csi(&mut self, params: &str, final_byte: u8) {
        if let Some(private) = params.strip_prefix('?') {
            assert_eq!(private, "1049", "unsupported private mode");
            match final_byte {
                b'h' => {
                    let grid = std::mem::replace(&mut self.grid, vec![vec![' '; WIDTH]; self.height]);
                    self.primary = Some((grid, self.row, self.col));
                }
                b'l' => {
                    if let Some((grid, row, col)) = self.primary.take() {
                        self.grid = grid;
                        self.row = row;
                        self.col = col;
                    }
                }
                other => panic!("unsupported private final {}", other as char),
            }
            return;
        }

        let nums: Vec<usize> = params
            .split(';')
            .filter(|p| !p.is_empty())
            .map(|p| p.parse().unwrap())
            .collect();
        let n = nums.first().copied().unwrap_or(1);

        match final_byte {
            b'A' => self.row = self.row.saturating_sub(n),
            b'B' => self.row = (self.row + n).min(self.height - 1),
            b'G' => self.col = n - 1,
            b'H' => {
                self.row = nums.first().copied().unwrap_or(1) - 1;
                self.col = nums.get(1).copied().unwrap_or(1) - 1;
            }
            b'J' => {
                assert_eq!(n, 2, "only full clears are expected");
                self.grid = vec![vec![' '; WIDTH]; self.height];
            }
            other => panic!("unsupported CSI final {}", other as char),
        }
    }
}

/// How a checklist row should look on screen.
pub fn row_text(label: &str, glyph: char) -> String {
    format!("{:<24}[{}]", format!("{}:", label), glyph)
}
