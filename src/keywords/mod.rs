//! Job keyword lists: loading, role-file detection and built-in role sets

use crate::error::{AtsAnalyzerError, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Ordered list of job keywords. Comparison against CV text is
/// case-insensitive; the list itself keeps the original casing and order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl KeywordList {
    /// Split a comma-delimited string into trimmed, non-empty keywords.
    pub fn from_comma_separated(raw: &str) -> Self {
        let keywords = raw
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(String::from)
            .collect();
        Self { keywords }
    }

    /// Load a keyword file (comma-delimited, e.g. `software_engineer.txt`).
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AtsAnalyzerError::KeywordLoading(format!(
                "Failed to read keyword file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::from_comma_separated(&raw))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

/// Fallback role file used when no role matches the CV file name.
pub const DEFAULT_ROLE: &str = "software_engineer";

/// Pick the keyword file for a CV by its file name.
///
/// The CV name is normalized (lowercased, spaces to underscores) and the
/// first `*.txt` file in `keywords_dir` whose stem occurs in it wins.
/// Falls back to `software_engineer.txt` if present, else the first file;
/// `None` when the directory holds no keyword files at all.
pub async fn detect_role_file(cv_name: &str, keywords_dir: &Path) -> Result<Option<PathBuf>> {
    let normalized = cv_name.to_lowercase().replace(' ', "_");

    let mut files: Vec<PathBuf> = Vec::new();
    let mut entries = match fs::read_dir(keywords_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Keyword directory '{}' not readable: {}",
                keywords_dir.display(),
                e
            );
            return Ok(None);
        }
    };
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();

    for path in &files {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if normalized.contains(&stem.to_lowercase()) {
                info!("Matched role file '{}' for CV '{}'", path.display(), cv_name);
                return Ok(Some(path.clone()));
            }
        }
    }

    let default = keywords_dir.join(format!("{}.txt", DEFAULT_ROLE));
    if files.iter().any(|f| f == &default) {
        return Ok(Some(default));
    }
    Ok(files.into_iter().next())
}

/// Built-in role keyword sets, seedable to a keywords directory.
/// 25 occupational roles plus a universal soft-skills set.
pub fn builtin_roles() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "software_engineer",
            "Python, Java, C++, JavaScript, SQL, Git, Docker, Kubernetes, REST API, Agile, \
             Cloud, AWS, Azure, Google Cloud, Linux, HTML, CSS, React, Node.js, CI/CD, DevOps, \
             Microservices, System Design, Testing, Debugging, API Integration, Problem Solving",
        ),
        (
            "data_scientist",
            "Python, R, SQL, Machine Learning, Deep Learning, Statistics, Data Analysis, \
             Data Visualization, Pandas, NumPy, TensorFlow, PyTorch, Scikit-learn, \
             Natural Language Processing, Big Data, Hadoop, Spark, Data Mining, Cloud, AWS, \
             Azure, Google Cloud, ETL, Tableau, Power BI, Data Cleaning, Predictive Modeling, \
             Jupyter",
        ),
        (
            "data_engineer",
            "Python, SQL, ETL, Data Pipelines, Big Data, Hadoop, Spark, Kafka, Airflow, Cloud, \
             AWS, Azure, Google Cloud, Snowflake, Redshift, Databricks, Data Warehousing, \
             Data Lakes, SQL Optimization, NoSQL, MongoDB, Cassandra, Scala, Java, Docker, \
             Kubernetes",
        ),
        (
            "devops_engineer",
            "CI/CD, Git, Jenkins, Docker, Kubernetes, Terraform, Ansible, AWS, Azure, \
             Google Cloud, Linux, Bash, Python, Monitoring, Prometheus, Grafana, \
             CloudFormation, Security, Networking, Scripting, Automation, \
             Infrastructure as Code, Configuration Management",
        ),
        (
            "cybersecurity_analyst",
            "Cybersecurity, Risk Assessment, Incident Response, SIEM, Firewall, IDS, IPS, \
             Threat Hunting, Vulnerability Assessment, Penetration Testing, Ethical Hacking, \
             Encryption, Network Security, Endpoint Security, Cloud Security, Compliance, \
             NIST, ISO 27001, SOC, Security Policies",
        ),
        (
            "business_analyst",
            "Business Analysis, Requirements Gathering, Stakeholder Management, \
             Process Improvement, Data Analysis, SQL, Excel, UML, Use Cases, Agile, Scrum, \
             Communication, Documentation, Gap Analysis, Reporting, Problem Solving, \
             Decision Making",
        ),
        (
            "mechanical_engineer",
            "Mechanical Design, CAD, SolidWorks, AutoCAD, Thermodynamics, Manufacturing, \
             Materials, Fluid Mechanics, HVAC, Robotics, Prototyping, 3D Printing, Simulation, \
             Stress Analysis, Quality Control, Product Development",
        ),
        (
            "civil_engineer",
            "Civil Engineering, Structural Engineering, AutoCAD, Construction, \
             Project Management, Surveying, Concrete, Steel, Geotechnical, \
             Transportation Engineering, Environmental Engineering, Hydraulics, \
             Building Codes, Cost Estimation, Site Inspection",
        ),
        (
            "electrical_engineer",
            "Circuit Design, Electronics, Power Systems, MATLAB, Embedded Systems, PCB Design, \
             Microcontrollers, Control Systems, Signal Processing, Renewable Energy, \
             Automation, Testing, Troubleshooting, Robotics, IoT",
        ),
        (
            "uiux_designer",
            "UI Design, UX Design, Wireframing, Prototyping, Figma, Sketch, Adobe XD, \
             Usability Testing, User Research, Interaction Design, Visual Design, \
             Accessibility, Mobile Design, Responsive Design, Information Architecture, \
             Creativity",
        ),
        (
            "project_manager",
            "Project Management, Agile, Scrum, Kanban, Jira, Trello, Leadership, Communication, \
             Stakeholder Management, Risk Management, Budgeting, Scheduling, Planning, \
             Resource Allocation, Change Management, Team Management, PMP, Prince2, MS Project",
        ),
        (
            "product_manager",
            "Product Management, Roadmap, Strategy, Agile, Scrum, Market Research, Wireframing, \
             Prototyping, User Stories, Prioritization, Stakeholder Management, Analytics, \
             Go-to-Market, A/B Testing, Communication, Leadership",
        ),
        (
            "operations_manager",
            "Operations Management, Supply Chain, Logistics, Process Improvement, Lean, \
             Six Sigma, Inventory Management, Quality Control, Scheduling, Forecasting, \
             Vendor Management, Procurement, Cost Reduction, Efficiency, ERP Systems",
        ),
        (
            "supply_chain",
            "Supply Chain, Logistics, Procurement, Inventory Management, Distribution, \
             Warehouse Management, Demand Planning, Transportation, ERP, SAP, Forecasting, \
             Vendor Management, Sourcing, Shipping, Import/Export",
        ),
        (
            "consultant",
            "Consulting, Strategy, Business Analysis, Market Research, Financial Analysis, \
             Problem Solving, Client Management, Stakeholder Engagement, Presentation Skills, \
             PowerPoint, Excel, Data Analysis, Change Management",
        ),
        (
            "graphic_designer",
            "Adobe Photoshop, Adobe Illustrator, Adobe InDesign, Figma, Sketch, Canva, \
             UI Design, UX Design, Typography, Branding, Logo Design, Color Theory, Layout, \
             Wireframing, Prototyping, Visual Design, Adobe XD, Motion Graphics",
        ),
        (
            "marketing_specialist",
            "Marketing Strategy, Digital Marketing, SEO, SEM, Content Marketing, Social Media, \
             Google Analytics, Email Marketing, PPC, Advertising, Branding, Campaign Management, \
             Copywriting, Public Relations, Market Research, CRM, HubSpot, Salesforce, \
             Conversion Optimization",
        ),
        (
            "content_writer",
            "Content Writing, Copywriting, Blogging, SEO, Storytelling, Editing, Proofreading, \
             Research, Social Media, Marketing, Creativity, Grammar, WordPress, Journalism, \
             Press Releases, Creative Writing",
        ),
        (
            "nurse",
            "Nursing, Patient Care, Clinical Skills, Medical Records, \
             Medication Administration, Vital Signs, IV Therapy, Emergency Care, \
             Communication, Compassion, Critical Thinking, Health Education, \
             Infection Control, Pediatrics, Geriatrics, Surgery, Documentation",
        ),
        (
            "pharmacist",
            "Pharmacy, Prescriptions, Medication, Pharmacology, Drug Interactions, \
             Patient Counseling, Clinical Knowledge, Dosage, Compounding, Inventory, \
             Regulatory Compliance, Research, Healthcare, Pharmacovigilance",
        ),
        (
            "healthcare_administrator",
            "Healthcare Management, Hospital Operations, Compliance, Patient Care, \
             Medical Records, Budgeting, Staffing, Scheduling, Healthcare Policy, \
             Risk Management, Insurance, Communication, Strategic Planning",
        ),
        (
            "teacher",
            "Teaching, Lesson Planning, Classroom Management, Curriculum Development, \
             Student Assessment, Educational Technology, Communication, Collaboration, \
             Child Development, Special Education, Differentiated Instruction, \
             Student Engagement, Mentoring, Tutoring, Parent Communication",
        ),
        (
            "human_resources",
            "Recruitment, Talent Acquisition, HR Policies, Payroll, Employee Relations, \
             Onboarding, Training, Performance Management, Compensation, Benefits, HRIS, \
             Compliance, Diversity, Workplace Safety, Conflict Resolution, \
             Employee Engagement, Labor Laws",
        ),
        (
            "sales_representative",
            "Sales, Customer Relationship, Negotiation, Cold Calling, Prospecting, \
             Lead Generation, CRM, Salesforce, Pipeline Management, Closing Deals, \
             Presentation Skills, Account Management, Business Development, Upselling, \
             Target Achievement, Client Retention",
        ),
        (
            "financial_analyst",
            "Financial Analysis, Accounting, Excel, Budgeting, Forecasting, Financial Modeling, \
             Valuation, Investment, Reporting, Financial Statements, Risk Management, Auditing, \
             Corporate Finance, Strategy, Data Analysis",
        ),
        (
            "general_keywords",
            "Communication, Teamwork, Leadership, Problem Solving, Time Management, \
             Adaptability, Creativity, Collaboration, Critical Thinking, Decision Making, \
             Organization, Interpersonal Skills, Negotiation, Emotional Intelligence, \
             Active Listening, Presentation Skills, Conflict Resolution, Professionalism, \
             Work Ethic, Multitasking",
        ),
    ]
}

/// Write the built-in role files into `keywords_dir`, creating it if needed.
/// Existing files are left untouched. Returns the paths written.
pub async fn seed_role_files(keywords_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(keywords_dir).await?;

    let mut written = Vec::new();
    for (role, keywords) in builtin_roles() {
        let path = keywords_dir.join(format!("{}.txt", role));
        if fs::try_exists(&path).await? {
            continue;
        }
        fs::write(&path, keywords).await?;
        info!("Created keyword file {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_comma_separated_trims_and_drops_blanks() {
        let list = KeywordList::from_comma_separated(" Python , SQL ,, Docker ,");
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["Python", "SQL", "Docker"]
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(KeywordList::from_comma_separated("").is_empty());
        assert!(KeywordList::from_comma_separated(" , , ").is_empty());
    }

    #[test]
    fn test_builtin_roles_cover_full_set() {
        let roles = builtin_roles();
        // 25 occupational roles plus the universal soft-skills set.
        assert_eq!(roles.len(), 26);

        let names: Vec<&str> = roles.iter().map(|(name, _)| *name).collect();
        for expected in [
            "software_engineer",
            "cybersecurity_analyst",
            "uiux_designer",
            "supply_chain",
            "nurse",
            "human_resources",
            "sales_representative",
            "general_keywords",
        ] {
            assert!(names.contains(&expected), "missing role {}", expected);
        }

        for (name, raw) in &roles {
            assert!(
                !KeywordList::from_comma_separated(raw).is_empty(),
                "empty keyword set for {}",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_detect_role_file_by_cv_name() {
        let dir = TempDir::new().unwrap();
        seed_role_files(dir.path()).await.unwrap();

        let matched = detect_role_file("jane_data_scientist_cv", dir.path())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            matched.file_stem().and_then(|s| s.to_str()),
            Some("data_scientist")
        );
    }

    #[tokio::test]
    async fn test_detect_role_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        seed_role_files(dir.path()).await.unwrap();

        let matched = detect_role_file("john_doe_cv", dir.path())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            matched.file_stem().and_then(|s| s.to_str()),
            Some(DEFAULT_ROLE)
        );
    }

    #[tokio::test]
    async fn test_detect_role_file_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(detect_role_file("cv", &missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let written = seed_role_files(dir.path()).await.unwrap();
        assert_eq!(written.len(), builtin_roles().len());

        let list = KeywordList::load(&dir.path().join("devops_engineer.txt"))
            .await
            .unwrap();
        assert!(list.iter().any(|kw| kw == "Terraform"));
        assert!(!list.is_empty());

        // Re-seeding skips existing files.
        let rewritten = seed_role_files(dir.path()).await.unwrap();
        assert!(rewritten.is_empty());
    }
}
