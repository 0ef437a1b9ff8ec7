#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::{Path, PathBuf};

    use float_cmp::approx_eq;
    use sheetnest::NestError;
    use sheetnest::io::import;
    use sheetnest_cli::config::NestConfig;
    use sheetnest_cli::io;
    use sheetnest_cli::io::output::NestOutput;
    use sheetnest_cli::run::{output_stems, run_request};
    use test_case::test_case;

    fn run(instance_path: &str, config: NestConfig, folder: &Path) -> anyhow::Result<NestOutput> {
        let path = PathBuf::from(instance_path);
        let stem = output_stems(&[path.clone()])?.remove(0);
        run_request(&path, &stem, config, folder)
    }

    fn solution_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("sheetnest_{name}_{}", std::process::id()));
        std::fs::create_dir_all(&folder).unwrap();
        folder
    }

    #[test_case("../assets/brackets.json"; "brackets")]
    #[test_case("../assets/squares.json"; "squares")]
    #[test_case("../assets/spaced.json"; "spaced")]
    fn every_part_is_placed_exactly_once(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import(&ext_instance).unwrap();

        let folder = solution_folder(&instance.name);
        let output = run(instance_path, NestConfig::default(), &folder).unwrap();

        let mut part_ids = output
            .solution
            .sheets
            .iter()
            .flat_map(|s| s.placed_parts.iter().map(|p| p.part_id))
            .collect::<Vec<_>>();
        part_ids.sort();
        assert_eq!(part_ids, (0..instance.n_parts()).collect::<Vec<_>>());
        assert_eq!(output.solution.n_sheets, output.solution.sheets.len());

        for sheet in &output.solution.sheets {
            for p in &sheet.placed_parts {
                assert!(p.x + p.height <= sheet.sheet_length);
                assert!(p.y + p.width <= sheet.sheet_width);
            }
        }
    }

    #[test_case("../assets/squares.json", 2; "third square overflows")]
    #[test_case("../assets/spaced.json", 2; "spacing forces a second sheet")]
    fn sheet_count(instance_path: &str, n_sheets: usize) {
        let folder = solution_folder("sheet_count");
        let output = run(instance_path, NestConfig::default(), &folder).unwrap();
        assert_eq!(output.solution.n_sheets, n_sheets);
    }

    #[test]
    fn outputs_are_named_after_the_request() {
        let config = io::read_config(Path::new("../assets/config.json")).unwrap();
        assert!(config.export_dxf);

        let folder = solution_folder("naming");
        let output = run("../assets/squares.json", config, &folder).unwrap();

        assert!(folder.join("sol_squares.json").exists());
        for i in 0..output.solution.n_sheets {
            assert!(folder.join(format!("sol_squares_{i}.svg")).exists());
            assert!(folder.join(format!("sol_squares_{i}.dxf")).exists());
        }
        assert!(!folder.join(format!("sol_squares_{}.svg", output.solution.n_sheets)).exists());
    }

    #[test]
    fn written_solution_carries_the_cut_list() {
        let folder = solution_folder("cut_list");
        run("../assets/brackets.json", NestConfig::default(), &folder).unwrap();

        let file = File::open(folder.join("sol_brackets.json")).unwrap();
        let json: serde_json::Value = serde_json::from_reader(BufReader::new(file)).unwrap();

        assert_eq!(json["name"], "brackets");
        let first = &json["solution"]["sheets"][0]["placed_parts"][0];
        assert_eq!(first["seq"], 1);
        assert_eq!(first["part_no"], "B-001");
        assert_eq!(first["part_description"], "base plate");
        assert_eq!(first["shape_type"], "rectangle");

        let sheets = json["solution"]["sheets"].as_array().unwrap();
        let part_area: u64 = sheets
            .iter()
            .flat_map(|s| s["placed_parts"].as_array().unwrap())
            .map(|p| p["width"].as_u64().unwrap() * p["height"].as_u64().unwrap())
            .sum();
        let sheet_area = sheets.len() as u64 * 40 * 60;
        let density = json["solution"]["density"].as_f64().unwrap() as f32;
        assert!(approx_eq!(f32, density, part_area as f32 / sheet_area as f32, epsilon = 1e-6));
    }

    #[test]
    fn oversized_part_fails_the_request() {
        let folder = solution_folder("oversized");
        let err = run("../assets/oversized.json", NestConfig::default(), &folder)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<NestError>(),
            Some(NestError::InvalidPartDimensions { .. })
        ));
        assert!(!folder.join("sol_oversized.json").exists());
    }

    #[test]
    fn requests_sharing_a_file_name_keep_separate_outputs() {
        let inputs = vec![
            PathBuf::from("../assets/squares.json"),
            PathBuf::from("../assets/batch/squares.json"),
        ];
        let stems = output_stems(&inputs).unwrap();
        assert_eq!(stems, vec!["squares_0", "squares_1"]);

        let folder = solution_folder("same_stem");
        let outputs = inputs
            .iter()
            .zip(&stems)
            .map(|(input, stem)| run_request(input, stem, NestConfig::default(), &folder).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(outputs[0].solution.n_sheets, 2);
        assert_eq!(outputs[1].solution.n_sheets, 1);

        for (stem, output) in stems.iter().zip(&outputs) {
            let file = File::open(folder.join(format!("sol_{stem}.json"))).unwrap();
            let json: serde_json::Value = serde_json::from_reader(BufReader::new(file)).unwrap();
            assert_eq!(json["name"], output.instance.name.as_str());
            assert_eq!(json["solution"]["n_sheets"], output.solution.n_sheets);
        }
        assert!(folder.join("sol_squares_1_0.svg").exists());
        assert!(!folder.join("sol_squares.json").exists());
    }

    #[test]
    fn distinct_file_names_keep_their_stem() {
        let inputs = vec![PathBuf::from("a/brackets.json"), PathBuf::from("a/squares.json")];
        assert_eq!(output_stems(&inputs).unwrap(), vec!["brackets", "squares"]);
    }

    #[test]
    fn suffixed_names_that_still_collide_are_rejected() {
        let inputs = vec![
            PathBuf::from("a/req.json"),
            PathBuf::from("b/req.json"),
            PathBuf::from("c/req_1.json"),
        ];
        assert!(output_stems(&inputs).is_err());
    }

    #[test]
    fn missing_config_file_is_named_in_the_error() {
        let err = io::read_config(Path::new("../assets/no_such_config.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no_such_config.json"));
    }
}
