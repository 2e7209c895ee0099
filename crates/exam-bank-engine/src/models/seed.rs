use super::question::QuestionRecord;

/// Sample questions served before the first successful upload.
pub fn sample_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord {
            id: 1,
            stem: "You have an Azure subscription that contains a custom application named Application1. Application1 was developed by an external company named Fabrikam, Ltd. Developers at Fabrikam were assigned role-based access control (RBAC) permissions to the Application1 components. All users are licensed for the Microsoft 365 E5 plan. You need to recommend a solution to verify whether the Fabrikam developers still require permissions to Application1. The solution must meet the following requirements: To the manager of the developers, send a monthly email message that lists the access permissions to Application1. If the manager does not verify an access permission, automatically revoke that permission. Minimize development effort. What should you recommend?".to_string(),
            options: vec![
                "In Azure Active Directory (Azure AD), create an access review of Application1.".to_string(),
                "Create an Azure Automation runbook that runs the Get-AzRoleAssignment cmdlet.".to_string(),
                "In Azure Active Directory (Azure AD) Privileged Identity Management, create a custom role assignment for the Application1 resources.".to_string(),
                "Create an Azure Automation runbook that runs the Get-AzureADUserAppRoleAssignment cmdlet.".to_string(),
            ],
            correct_answer_index: 0,
            has_explicit_answer: true,
            explanation: "Azure AD Access Reviews allows you to periodically review and verify user access permissions. This feature can automatically send email notifications to managers and revoke access if not verified, meeting all the specified requirements with minimal development effort.\n\nReference: https://docs.microsoft.com/en-us/azure/active-directory/governance/manage-user-access-with-access-reviews".to_string(),
        },
        QuestionRecord {
            id: 2,
            stem: "Your company has the divisions shown in the following table. Division Azure subscription Azure AD tenant East Sub1 Contoso.com West Sub2 Fabrikam.com Sub1 contains an Azure App Service web app named App1. App1 uses Azure AD for single-tenant user authentication. Users from contoso.com can authenticate to App1. You need to recommend a solution to enable users in the fabrikam.com tenant to authenticate to App1. What should you recommend?".to_string(),
            options: vec![
                "Configure Azure AD join.".to_string(),
                "Use Azure AD entitlement management to govern external users.".to_string(),
                "Enable Azure AD pass-through authentication and update the sign-in endpoint.".to_string(),
                "Configure assignments for the fabrikam.com users by using Azure AD Privileged Identity Management (PIM).".to_string(),
            ],
            correct_answer_index: 1,
            has_explicit_answer: true,
            explanation: "Azure AD entitlement management allows you to manage access for external users from different tenants. This is the correct solution for enabling cross-tenant authentication while maintaining security and governance.".to_string(),
        },
        QuestionRecord {
            id: 3,
            stem: "You have an Azure subscription. The subscription has a blob container that contains multiple blobs. Ten users in the finance department of your company plan to access the blobs during the month of April. You need to recommend a solution to enable access to the blobs during the month of April only. Which security solution should you include in the recommendation?".to_string(),
            options: vec![
                "shared access signatures (SAS)".to_string(),
                "Conditional Access policies".to_string(),
                "certificates".to_string(),
                "access keys".to_string(),
            ],
            correct_answer_index: 0,
            has_explicit_answer: true,
            explanation: "Shared Access Signatures (SAS) allows for limited-time fine grained access control to resources. You can generate URL, specify duration (for month of April) and disseminate URL to 10 team members. On May 1, the SAS token is automatically invalidated, denying team members continued access.\n\nReference: https://docs.microsoft.com/en-us/azure/storage/common/storage-sas-overview".to_string(),
        },
    ]
}
