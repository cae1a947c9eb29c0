//! Masks and various other constants.

/// The total number of players on a chessboard.
pub const PLAYER_CNT: usize = 2;
/// The total number of piece types on a chessboard.
pub const PIECE_TYPE_CNT: usize = 6;
/// The total number of squares on a chessboard.
pub const SQ_CNT: usize = 64;
/// The total number of files on a chessboard.
pub const FILE_CNT: usize = 8;
/// The total number of ranks on a chessboard.
pub const RANK_CNT: usize = 8;

/// Bit representation of file A.
pub const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Bit representation of file B.
pub const FILE_B: u64 = FILE_A << 1;
/// Bit representation of file C.
pub const FILE_C: u64 = FILE_A << 2;
/// Bit representation of file D.
pub const FILE_D: u64 = FILE_A << 3;
/// Bit representation of file E.
pub const FILE_E: u64 = FILE_A << 4;
/// Bit representation of file F.
pub const FILE_F: u64 = FILE_A << 5;
/// Bit representation of file G.
pub const FILE_G: u64 = FILE_A << 6;
/// Bit representation of file H.
pub const FILE_H: u64 = FILE_A << 7;

/// Bit representation of rank 1.
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
/// Bit representation of rank 2.
pub const RANK_2: u64 = RANK_1 << 8;
/// Bit representation of rank 3.
pub const RANK_3: u64 = RANK_1 << 16;
/// Bit representation of rank 4.
pub const RANK_4: u64 = RANK_1 << 24;
/// Bit representation of rank 5.
pub const RANK_5: u64 = RANK_1 << 32;
/// Bit representation of rank 6.
pub const RANK_6: u64 = RANK_1 << 40;
/// Bit representation of rank 7.
pub const RANK_7: u64 = RANK_1 << 48;
/// Bit representation of rank 8.
pub const RANK_8: u64 = RANK_1 << 56;

/// Bit representation of both back ranks.
pub const BACKRANKS: u64 = RANK_1 | RANK_8;
/// Bit representation of the four corner squares.
pub const CORNERS: u64 = 0x8100_0000_0000_0081;

/// Bit representation of all dark squares.
pub const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
/// Bit representation of all light squares.
pub const LIGHT_SQUARES: u64 = !DARK_SQUARES;

/// Array of all files and their corresponding bits, indexed from
/// file A to file H.
pub static FILE_BB: [u64; FILE_CNT] = [
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H,
];

/// Array of all ranks and their corresponding bits, indexed from
/// rank 1 to rank 8.
pub static RANK_BB: [u64; RANK_CNT] = [
    RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
];

/// Direction of going north on a chessboard.
pub const NORTH: i8 = 8;
/// Direction of going south on a chessboard.
pub const SOUTH: i8 = -8;
/// Direction of going west on a chessboard.
pub const WEST: i8 = -1;
/// Direction of going east on a chessboard.
pub const EAST: i8 = 1;
/// Direction of going northeast on a chessboard.
pub const NORTH_EAST: i8 = 9;
/// Direction of going northwest on a chessboard.
pub const NORTH_WEST: i8 = 7;
/// Direction of going southeast on a chessboard.
pub const SOUTH_EAST: i8 = -7;
/// Direction of going southwest on a chessboard.
pub const SOUTH_WEST: i8 = -9;

/// Bits for the starting position of white pawns.
pub const START_W_PAWN: u64 = RANK_2;
/// Bits for the starting position of white knights.
pub const START_W_KNIGHT: u64 = 0x42;
/// Bits for the starting position of white bishops.
pub const START_W_BISHOP: u64 = 0x24;
/// Bits for the starting position of white rooks.
pub const START_W_ROOK: u64 = 0x81;
/// Bits for the starting position of the white queen.
pub const START_W_QUEEN: u64 = 0x08;
/// Bits for the starting position of the white king.
pub const START_W_KING: u64 = 0x10;

/// Bits for the starting position of black pawns.
pub const START_B_PAWN: u64 = RANK_7;
/// Bits for the starting position of black knights.
pub const START_B_KNIGHT: u64 = START_W_KNIGHT << 56;
/// Bits for the starting position of black bishops.
pub const START_B_BISHOP: u64 = START_W_BISHOP << 56;
/// Bits for the starting position of black rooks.
pub const START_B_ROOK: u64 = START_W_ROOK << 56;
/// Bits for the starting position of the black queen.
pub const START_B_QUEEN: u64 = START_W_QUEEN << 56;
/// Bits for the starting position of the black king.
pub const START_B_KING: u64 = START_W_KING << 56;

/// Bits for the starting occupancy of the white player.
pub const START_WHITE_OCC: u64 = RANK_1 | RANK_2;
/// Bits for the starting occupancy of the black player.
pub const START_BLACK_OCC: u64 = RANK_7 | RANK_8;
/// Bits for the starting occupancy of both players.
pub const START_OCC_ALL: u64 = START_WHITE_OCC | START_BLACK_OCC;

/// Display order for squares, rank 8 first.
pub static SQ_DISPLAY_ORDER: [u8; SQ_CNT] = [
    56, 57, 58, 59, 60, 61, 62, 63, 48, 49, 50, 51, 52, 53, 54, 55, 40, 41, 42, 43, 44, 45, 46, 47,
    32, 33, 34, 35, 36, 37, 38, 39, 24, 25, 26, 27, 28, 29, 30, 31, 16, 17, 18, 19, 20, 21, 22, 23,
    8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7,
];

/// Array mapping a square index to a string representation.
///
/// # Examples
///
/// ```
/// use remora::core::masks::SQ_DISPLAY;
///
/// assert_eq!(SQ_DISPLAY[0], "a1");
/// assert_eq!(SQ_DISPLAY[8], "a2");
/// ```
pub static SQ_DISPLAY: [&str; SQ_CNT] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

/// Characters for each file, indexed from file A to file H.
pub static FILE_DISPLAYS: [char; FILE_CNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Characters for each rank, indexed from rank 1 to rank 8.
pub static RANK_DISPLAYS: [char; RANK_CNT] = ['1', '2', '3', '4', '5', '6', '7', '8'];
