// src/matching/catalog.rs
//! Canonical skill catalog: lowercase aliases and display-name overrides

/// Canonical skills and the lowercase aliases that count as a mention.
pub const SKILL_ALIASES: &[(&str, &[&str])] = &[
    // Languages
    ("python", &["python"]),
    ("javascript", &["javascript", "js"]),
    ("typescript", &["typescript", "ts"]),
    ("java", &["java"]),
    ("c++", &["c++"]),
    ("c#", &["c#", ".net", "dotnet"]),
    ("go", &["go", "golang"]),
    ("rust", &["rust"]),
    ("php", &["php"]),
    ("ruby", &["ruby", "ruby on rails", "rails"]),
    ("swift", &["swift"]),
    ("kotlin", &["kotlin"]),
    // Web
    ("react", &["react", "react.js", "reactjs"]),
    ("vue", &["vue", "vue.js", "vuejs"]),
    ("angular", &["angular"]),
    ("node.js", &["node.js", "node", "nodejs"]),
    ("express", &["express", "express.js"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("fastapi", &["fastapi"]),
    // Databases
    ("sql", &["sql"]),
    ("postgresql", &["postgresql", "postgres"]),
    ("mysql", &["mysql"]),
    ("sqlite", &["sqlite"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("redis", &["redis"]),
    ("oracle", &["oracle"]),
    ("dynamodb", &["dynamodb"]),
    // DevOps & Cloud
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("terraform", &["terraform"]),
    ("jenkins", &["jenkins"]),
    ("git", &["git", "github", "gitlab", "bitbucket"]),
    (
        "ci/cd",
        &[
            "ci/cd",
            "cicd",
            "continuous integration",
            "continuous delivery",
            "continuous deployment",
        ],
    ),
    ("linux", &["linux", "ubuntu", "debian", "centos"]),
    ("bash", &["bash", "shell", "shell scripting"]),
    ("nginx", &["nginx"]),
    ("apache", &["apache", "httpd"]),
    // Data & ML
    ("machine learning", &["machine learning", "ml"]),
    ("deep learning", &["deep learning", "dl"]),
    ("tensorflow", &["tensorflow"]),
    ("pytorch", &["pytorch"]),
    ("scikit-learn", &["scikit-learn", "sklearn"]),
    ("pandas", &["pandas"]),
    ("numpy", &["numpy"]),
    ("data science", &["data science", "data scientist"]),
    ("nlp", &["nlp", "natural language processing"]),
    ("computer vision", &["computer vision", "cv"]),
    ("opencv", &["opencv"]),
    ("keras", &["keras"]),
    // Concepts & Tools
    ("rest api", &["rest", "restful", "rest api"]),
    ("graphql", &["graphql"]),
    ("microservices", &["microservices", "micro-service", "micro service"]),
    ("backend", &["backend", "back-end", "back end"]),
    ("frontend", &["frontend", "front-end", "front end"]),
    ("full stack", &["full stack", "full-stack"]),
    ("orm", &["orm", "sequelize", "typeorm", "hibernate", "sqlalchemy"]),
    ("jwt", &["jwt", "json web token"]),
    ("oauth", &["oauth", "oauth2", "oauth 2.0"]),
    (
        "testing",
        &[
            "testing",
            "unit testing",
            "integration testing",
            "end to end",
            "e2e",
        ],
    ),
    ("pytest", &["pytest"]),
    ("jest", &["jest"]),
    ("mocha", &["mocha"]),
    ("agile", &["agile"]),
    ("scrum", &["scrum"]),
];

/// Canonicals whose display form is not just title case.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("c++", "C++"),
    ("c#", "C#"),
    ("node.js", "Node.js"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("ci/cd", "CI/CD"),
    ("nlp", "NLP"),
    ("rest api", "REST API"),
    ("aws", "AWS"),
    ("gcp", "GCP"),
    ("sql", "SQL"),
    ("jwt", "JWT"),
    ("oauth", "OAuth"),
];

/// Human-readable form of a canonical skill name.
pub fn display_name(canonical: &str) -> String {
    for (canon, display) in DISPLAY_NAMES {
        if *canon == canonical {
            return (*display).to_string();
        }
    }
    title_case(canonical)
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
