pub(crate) mod board {
    use colored::Colorize;
    use crate::board::Board;

    pub trait DebugPrintable {
        fn debug_print(&self);
    }

    impl DebugPrintable for Board {
        fn debug_print(&self) {
            let width = self.width();

            eprint!("┌");
            for col in 0..width {
                eprint!("────");
                if col < width - 1 {
                    eprint!("┬");
                }
            }
            eprintln!("┐");

            for row in 0..width {
                eprint!("│");
                for col in 0..width {
                    match self.tiles()[row * width + col] {
                        0 => eprint!(" {} ", "  ".on_green()),
                        tile => eprint!(" {:>2} ", tile),
                    }
                    eprint!("│");
                }
                eprintln!();

                if row < width - 1 {
                    eprint!("├");
                    for col in 0..width {
                        eprint!("────");
                        if col < width - 1 {
                            eprint!("┼");
                        }
                    }
                    eprintln!("┤");
                }
            }

            eprint!("└");
            for col in 0..width {
                eprint!("────");
                if col < width - 1 {
                    eprint!("┴");
                }
            }
            eprintln!("┘");
        }
    }

    pub trait Heuristic {
        fn get_heuristic(&self) -> u32;
    }

    impl Heuristic for Board {
        /// Sum of Manhattan distances between each tile's cell and the cell
        /// whose index equals the tile's value. The blank is not counted.
        fn get_heuristic(&self) -> u32 {
            let mut score: u32 = 0;

            for (idx, &tile) in self.tiles().iter().enumerate() {
                if tile == 0 {
                    continue;
                }
                let (x1, y1) = self.to_pos(tile as usize);
                let (x2, y2) = self.to_pos(idx);
                score += (x1 - x2).unsigned_abs() + (y1 - y2).unsigned_abs();
            }

            score
        }
    }
}
