//! Built-in role keyword table. Order matters: classification ties go to the
//! role defined first.

use crate::knowledge::Role;

/// `(role, primary keywords, secondary keywords)` in table order.
pub const ROLE_KEYWORDS: &[(Role, &[&str], &[&str])] = &[
    (
        Role::FrontendDeveloper,
        &[
            "react",
            "vue",
            "angular",
            "html",
            "css",
            "javascript",
            "typescript",
            "jsx",
            "sass",
            "webpack",
        ],
        &[
            "ui",
            "ux",
            "responsive",
            "bootstrap",
            "tailwind",
            "redux",
            "next.js",
            "nuxt",
        ],
    ),
    (
        Role::BackendDeveloper,
        &[
            "node.js",
            "python",
            "java",
            "api",
            "rest",
            "graphql",
            "sql",
            "mongodb",
            "express",
            "django",
        ],
        &[
            "postgresql",
            "mysql",
            "redis",
            "microservices",
            "spring",
            "flask",
            "fastapi",
        ],
    ),
    (
        Role::FullStackDeveloper,
        &[
            "full stack",
            "mern",
            "mean",
            "react",
            "node.js",
            "mongodb",
            "express",
        ],
        &[
            "frontend",
            "backend",
            "database",
            "api",
            "javascript",
            "typescript",
        ],
    ),
    (
        Role::DataScientist,
        &[
            "python",
            "machine learning",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
            "scikit-learn",
        ],
        &[
            "statistics",
            "data analysis",
            "deep learning",
            "nlp",
            "computer vision",
            "jupyter",
        ],
    ),
    (
        Role::MlEngineer,
        &[
            "machine learning",
            "tensorflow",
            "pytorch",
            "deep learning",
            "neural networks",
            "ai",
        ],
        &[
            "python",
            "model deployment",
            "mlops",
            "keras",
            "scikit-learn",
        ],
    ),
    (
        Role::DevOpsEngineer,
        &[
            "docker",
            "kubernetes",
            "aws",
            "ci/cd",
            "jenkins",
            "terraform",
            "ansible",
        ],
        &[
            "linux",
            "bash",
            "monitoring",
            "azure",
            "gcp",
            "gitlab",
            "github actions",
        ],
    ),
    (
        Role::MobileDeveloper,
        &["react native", "flutter", "ios", "android", "swift", "kotlin"],
        &[
            "mobile",
            "app development",
            "firebase",
            "xcode",
            "android studio",
        ],
    ),
    (
        Role::UiUxDesigner,
        &[
            "figma",
            "sketch",
            "adobe xd",
            "ui design",
            "ux design",
            "prototyping",
        ],
        &[
            "wireframing",
            "user research",
            "design systems",
            "illustrator",
            "photoshop",
        ],
    ),
    (
        Role::DataAnalyst,
        &[
            "sql",
            "excel",
            "tableau",
            "power bi",
            "data visualization",
            "statistics",
        ],
        &["python", "r", "data analysis", "reporting", "dashboards"],
    ),
];
