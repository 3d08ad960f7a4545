mod tests {
    use ledloom::step::{map_range, step_frac, step_index};

    #[test]
    fn test_step_index_walks_and_wraps() {
        assert_eq!(step_index(0, 1000, 10), 0);
        assert_eq!(step_index(250, 1000, 10), 2);
        assert_eq!(step_index(999, 1000, 10), 9);
        assert_eq!(step_index(1000, 1000, 10), 0);
        assert_eq!(step_index(1500, 1000, 10), 5);
    }

    #[test]
    fn test_step_index_degenerate_inputs() {
        // a zero period counts as one millisecond, a zero range as one step
        assert_eq!(step_index(123, 0, 10), 123 * 10 % 10);
        assert_eq!(step_index(500, 1000, 0), 0);
        assert_eq!(step_index(0, 0, 0), 0);
    }

    #[test]
    fn test_step_frac_ramps() {
        let t = step_frac(500, 1000, 1.0);
        assert!((t - 0.5).abs() < 1e-6);
        let t = step_frac(1500, 1000, 1.0);
        assert!((t - 0.5).abs() < 1e-6);
        let t = step_frac(750, 1000, 4.0);
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_step_frac_degenerate_inputs() {
        assert_eq!(step_frac(500, 1000, 0.0), 0.0);
        assert_eq!(step_frac(500, 1000, -2.0), 0.0);
        let t = step_frac(3, 0, 1.0);
        assert!(t >= 0.0 && t < 1.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(0.25, 0.0, 1.0, 0.0, 8.0), 2.0);
        // degenerate input span collapses to the output floor
        assert_eq!(map_range(7.0, 3.0, 3.0, 1.0, 9.0), 1.0);
    }
}
