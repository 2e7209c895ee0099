use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// One boxed-format question as it comes out of PDF text extraction.
pub const BOXED_SAMPLE: &str = "
Question #1                                                    Topic 1

You have an Azure subscription that contains a custom application named Application1. Application1 was developed by an external company named Fabrikam, Ltd. Developers at Fabrikam were assigned role-based access control (RBAC) permissions to the Application1 components. All users are licensed for the Microsoft 365 E5 plan.

You need to recommend a solution to verify whether the Fabrikam developers still require permissions to Application1. The solution must meet the following requirements: ⇨ To the manager of the developers, send a monthly email message that lists the access permissions to Application1. ⇨ If the manager does not verify an access permission, automatically revoke that permission. ⇨ Minimize development effort.

What should you recommend?

A. In Azure Active Directory (Azure AD), create an access review of Application1.
B. Create an Azure Automation runbook that runs the Get-AzRoleAssignment cmdlet.
C. In Azure Active Directory (Azure AD) Privileged Identity Management, create a custom role assignment for the Application1 resources.
D. Create an Azure Automation runbook that runs the Get-AzureADUserAppRoleAssignment cmdlet.

Correct Answer: A

Reference:
https://docs.microsoft.com/en-us/azure/active-directory/governance/manage-user-access-with-access-reviews

Community vote distribution
A (100%)
";

/// Two boxed questions; the second has no answer marker.
pub const TWO_BLOCKS_SECOND_UNANSWERED: &str = "Question #1 Topic 1
You plan to deploy virtual machines across three availability zones.
Which SKU of load balancer should you use?
A. Basic
B. Gateway
C. Standard
Correct Answer: C
Zone redundancy needs the Standard SKU.
Question #2 Topic 1
You need to store application secrets for a web app.
Which service should you use?
A. Azure Key Vault
B. Azure Files
C. Azure Cosmos DB
";

/// A block with a single option followed by a valid block.
pub const SINGLE_OPTION_BLOCK: &str = "Question #1 Topic 2
You need to choose a backup vault redundancy option.
A. Geo-redundant storage
Correct Answer: A
Question #2 Topic 2
You need to configure log retention for a storage account.
Which setting should you change?
A. Lifecycle management
B. Diagnostic settings
Correct Answer: B
";

/// Create a temporary directory for source files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with bytes content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
