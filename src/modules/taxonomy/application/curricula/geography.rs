use super::super::seeder::{ChapterSpec, CurriculumSpec, RootSpec, SubcategorySpec};

pub fn curriculum() -> CurriculumSpec {
    CurriculumSpec {
        domain: "geography",
        roots: vec![RootSpec {
            name: "Geography",
            description: "Physical, Indian and world geography.",
            subcategories: vec![
                SubcategorySpec {
                    name: "Physical Geography",
                    chapters: vec![
                        ChapterSpec { name: "Geomorphology", position: 1 },
                        ChapterSpec { name: "Climatology", position: 2 },
                        ChapterSpec { name: "Oceanography", position: 3 },
                        ChapterSpec { name: "Biogeography", position: 4 },
                        ChapterSpec { name: "Soil Geography", position: 5 },
                    ],
                },
                SubcategorySpec {
                    name: "Indian Geography",
                    chapters: vec![
                        ChapterSpec { name: "Physiographic Divisions", position: 1 },
                        ChapterSpec { name: "Drainage Systems", position: 2 },
                        ChapterSpec { name: "Climate of India", position: 3 },
                        ChapterSpec { name: "Agriculture", position: 4 },
                        ChapterSpec { name: "Minerals and Industries", position: 5 },
                    ],
                },
                SubcategorySpec {
                    name: "World Geography",
                    chapters: vec![
                        ChapterSpec { name: "Continents and Oceans", position: 1 },
                        ChapterSpec { name: "Major Industrial Regions", position: 2 },
                        ChapterSpec { name: "Map Work", position: 3 },
                    ],
                },
                SubcategorySpec {
                    name: "Economic Geography",
                    chapters: vec![
                        ChapterSpec { name: "Resources", position: 1 },
                        ChapterSpec { name: "Transport and Trade", position: 2 },
                    ],
                },
            ],
            chapters: vec![],
        }],
    }
}
