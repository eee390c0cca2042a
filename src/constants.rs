// Number of bases shown on either side of a hit
pub const DEFAULT_CONTEXT: usize = 4;

pub const DEFAULT_MISMATCHES: usize = 0;

// Zero lets rayon pick the number of threads
pub const DEFAULT_THREADS: usize = 0;

pub const SEARCH_HEADER: &str = "Subject\tPattern\tSequence\tStart\tEnd\tHits\tMismatches";

pub const RECORD_SEPARATOR: &str = "________";
