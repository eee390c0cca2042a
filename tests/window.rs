extern crate dnamatch;

use dnamatch::window::HitWindow;

#[test]
fn test_location_is_one_based_inclusive() {
    let window = HitWindow::new(8, 1, 4, 4);

    assert_eq!(window.location(), (2, 5));
}

#[test]
fn test_format_full_context() {
    let subject = b"GGGGATCGCCCCCC";
    let window = HitWindow::new(subject.len(), 4, 4, 4);

    assert_eq!(
        window.format(b"ATCG", subject),
        ("     ATCG".to_owned(), "GGGG ATCG CCCC".to_owned())
    );
}

#[test]
fn test_format_clamped_at_head() {
    let subject = b"GATCGCCC";
    let window = HitWindow::new(subject.len(), 1, 4, 4);

    assert_eq!(
        window.format(b"ATCG", subject),
        ("  ATCG".to_owned(), "G ATCG CCC".to_owned())
    );
}

#[test]
fn test_format_clamped_at_both_ends() {
    let subject = b"ATCG";
    let window = HitWindow::new(subject.len(), 0, 4, 4);

    assert_eq!(
        window.format(b"ATCG", subject),
        (" ATCG".to_owned(), " ATCG".to_owned())
    );
}

#[test]
fn test_format_custom_context() {
    let subject = b"AAAAAAGGTTTTTT";
    let window = HitWindow::new(subject.len(), 6, 2, 1);

    assert_eq!(
        window.format(b"GG", subject),
        ("  GG".to_owned(), "A GG T".to_owned())
    );
}

#[test]
fn test_format_ambiguous_pattern() {
    let subject = b"CCAGTT";
    let window = HitWindow::new(subject.len(), 2, 2, 0);

    assert_eq!(
        window.format(b"RK", subject),
        (" RK".to_owned(), " AG".to_owned())
    );
}
