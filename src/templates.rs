//! Canned file templates written into a freshly scaffolded project.
//!
//! Every template is authored as an indented raw block: a blank first line,
//! the body indented by [`BASE_INDENT`] spaces, and a whitespace-only closing
//! line. [`dedent`] turns such a block into the text that lands on disk.

/// Marker replaced with the include guard of a header.
pub const GUARD_TOKEN: &str = "@GUARD";
/// Marker replaced with the namespace derived from the file stem.
pub const NAMESPACE_TOKEN: &str = "@NAMESPACE";
/// Marker replaced with the header a file includes (`<stem>.hpp`).
pub const FILE_NAME_TOKEN: &str = "@FILE_NAME";

/// Indentation every raw template block is authored with.
pub const BASE_INDENT: usize = 4;

const GITIGNORE: &str = r##"
    build
    test
    "##;

const README_MD: &str = r##"
    # Project name

    This project was made using `cbt`

    ## Setup

    Discuss your setup here

    ## Code of contribution

    Discuss rules of engagement here
    "##;

const LICENSE_TXT: &str = r##"
    This is a sample license file.

    Add actual content in this file.
    "##;

const ROADMAP_MD: &str = r##"
    # Sample Roadmap

    - [X] Get legal documents
    - [ ] Setup infrastructure
    - [ ] Develop login feature:
        - [X] Model the data
        - [ ] Sanitise data
        - [ ] Persist in database
    - [ ] Setup media driver:
        - [ ] Get necessary interface descriptions
        - [ ] Perform R/W
        - [ ] Subject code to thorough testing
    "##;

const SAMPLE_HPP: &str = r##"
    #ifndef @GUARD
    #define @GUARD

    #include <iostream>
    #include <vector>

    namespace @NAMESPACE {
        int sum(const int a, const int b);

        enum class Sex {
            MALE,
            FEMALE,
            NON_BINARY
        };

        struct Person {
            std::string first_name;
            std::string last_name;
            Sex sex;

            friend std::ostream& operator<<(std::ostream& out, const Person& person);
        };

        struct Employee {
            std::string id;
            std::string first_name;
            std::string last_name;
            Sex sex;

            friend std::ostream& operator<<(std::ostream& out, const Employee& employee);
        };

        class SampleCompany {
        public:
            SampleCompany(const std::string location);
            bool fire(const std::string employee_id, const std::string reason);
            std::string get_location() const;
            Employee hire(const Person person);
            bool is_candidate_eligible(const Person person) const;
            std::vector<Employee> list_absentees() const;
            friend std::ostream& operator<<(std::ostream& out, const SampleCompany& company);

        private:
            Employee founder;
            std::vector<Employee> employees;
            std::string location;
        };
    }

    #endif
    "##;

const SAMPLE_CPP: &str = r##"
    #include "@FILE_NAME"

    #include <iostream>
    #include <vector>

    namespace @NAMESPACE {
        int sum(const int a, const int b) {
            return a + b;
        }

        std::ostream& operator<<(std::ostream& out, const Person& person) {
            out << person.first_name << std::endl;
            return out;
        }

        std::ostream& operator<<(std::ostream& out, const Employee& employee) {
            out << employee.id << std::endl;
            return out;
        }

        SampleCompany::SampleCompany(std::string location): location(location){}

        std::string SampleCompany::get_location() const {
            return this->location;
        }

        std::ostream& operator<<(std::ostream& out, const SampleCompany& company) {
            out << company.get_location() << std::endl;
            return out;
        }
    }
    "##;

const MAIN_CPP: &str = r##"
    #include <iostream>
    #include <map>

    #include "sample.hpp"

    int main(const int argc, char *argv[], char *envp[]) {
        std::vector<std::string> args(argv, argv + argc);
        std::map<std::string, std::string> env;

        while (*envp) {
            const std::string env_variable = std::string(*envp++);
            const int position_of_equal_to_symbol = env_variable.find("=");

            const std::string key = env_variable.substr(0, position_of_equal_to_symbol);
            const std::string value = env_variable.substr(position_of_equal_to_symbol + 1);

            env[key] = value;
        }

        std::cout << "args[0]: " << args[0] << std::endl;
        std::cout << "env[\"HOME\"]: " << env["HOME"] << std::endl;

        std::cout << "Sum of 2 and 3 is: " << sample::sum(2, 3) << std::endl;

        return EXIT_SUCCESS;
    }
    "##;

const PROJECT_CFG: &str = r##"
    ; Since a rudimentary INI parser is used, ensure that the actual `key` and `value` pairs
    ; follow the same `key` and `value` format in this file which was provided while creation
    ; of the project. Also, ensure that each pair is contained within a single line.

    name=my-project
    description=A sample project that does so and so

    version=2023-11-09

    ; `authors` is always an array even if there is only one entity. At least one author is required.
    authors[]=Sample LName <sample_lname@domain.tld>
    authors[]=Another MName LName <another_nmane_lname@domain.tld>

    ; `platforms` is always an array even if there is only one supported platform and
    ; values can be any of 'linux', 'macos', 'unix', `windows`. At least one platform is required.
    platforms[]=linux
    platforms[]=macos
    platforms[]=unix
    platforms[]=windows
    "##;

/// Logical role of a template inside a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
    Gitignore,
    Readme,
    License,
    Roadmap,
    SampleHeader,
    SampleSource,
    Main,
    ProjectConfig,
}

impl TemplateRole {
    /// Raw, still indented template block.
    pub fn raw(self) -> &'static str {
        match self {
            TemplateRole::Gitignore => GITIGNORE,
            TemplateRole::Readme => README_MD,
            TemplateRole::License => LICENSE_TXT,
            TemplateRole::Roadmap => ROADMAP_MD,
            TemplateRole::SampleHeader => SAMPLE_HPP,
            TemplateRole::SampleSource => SAMPLE_CPP,
            TemplateRole::Main => MAIN_CPP,
            TemplateRole::ProjectConfig => PROJECT_CFG,
        }
    }

    /// Template text with the authoring indentation removed.
    pub fn text(self) -> String {
        dedent(self.raw(), BASE_INDENT)
    }
}

/// Removes the framing lines and the base indentation of a raw block.
///
/// The first and last lines are dropped. Up to `width` leading whitespace
/// characters are stripped from every remaining line; shorter lines lose what
/// they have. Each kept line is terminated with `\n`.
pub fn dedent(raw: &str, width: usize) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() < 2 {
        return String::new();
    }

    let mut text = String::new();
    for line in &lines[1..lines.len() - 1] {
        let cut = line
            .char_indices()
            .take(width)
            .take_while(|(_, c)| c.is_whitespace())
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        text.push_str(&line[cut..]);
        text.push('\n');
    }
    text
}
